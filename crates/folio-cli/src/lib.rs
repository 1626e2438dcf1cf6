mod args;
mod commands;
pub mod config;
mod handlers;
pub mod input;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
