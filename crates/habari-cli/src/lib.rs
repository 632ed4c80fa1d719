//! The `habari` command: parse one filename, print what was found.
//!
//! Plain output lists only the fields that were recognised, aligned on one
//! column. `--json` prints the whole record, empty fields included.

mod args;
mod commands;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
