pub mod install;
pub mod platform;
pub mod render;
