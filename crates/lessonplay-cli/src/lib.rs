mod args;
mod commands;
pub mod config;
mod handlers;
mod output;
pub mod types;

pub use args::{AnalyzeCommand, Cli, Commands};
pub use commands::run;
