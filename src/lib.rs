//! ninety - A 90-minute terminal focus timer
//!
//! This crate provides a focus timer with randomized breathing breaks
//! and a per-day history of focus time, driven by a deterministic
//! one-second tick engine.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod output;
pub mod sound;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use engine::FocusEngine;
pub use error::NinetyError;
