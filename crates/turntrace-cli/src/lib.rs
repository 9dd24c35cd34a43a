// NOTE: The CLI is a thin shell over turntrace-engine.
// Reconstruction is pure; everything here is argument parsing, config
// resolution, file reading and rendering.

mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
