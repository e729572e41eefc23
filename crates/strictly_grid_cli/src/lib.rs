//! Strictly Grid terminal front end
//!
//! Game files, the console driver and the command-line surface for the
//! `strictly-grid` binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameFile, PlayerEntry, PlayerKind};
pub use console::{Console, run};
