//! CLI subcommand implementations.

pub mod account;
