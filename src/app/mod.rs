pub mod api;
pub mod cli;
pub mod commands;
pub mod resolve;

mod context;

pub use context::AppContext;
