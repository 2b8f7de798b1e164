//! CLI argument parsing and command handling.

mod args;
pub mod help;
mod validators;

pub use args::{Cli, Command, ConfigAction, ManifestArgs};
pub use validators::{parse_threshold, parse_train_size};
