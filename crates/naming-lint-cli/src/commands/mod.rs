//! Subcommand implementations.

pub mod check;
pub mod editorconfig;
pub mod init;
pub mod list_rules;
pub mod output;
