//! CLI command handlers

pub mod commands;

pub use commands::{default_period, fields, generate, preview};
