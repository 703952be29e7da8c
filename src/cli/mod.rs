//! Command-line interface for ninety.

pub mod args;
pub mod commands;
