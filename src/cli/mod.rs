//! Command line front end

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
