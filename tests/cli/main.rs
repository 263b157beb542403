#[path = "../harness/mod.rs"]
mod harness;

mod install;
mod render;
