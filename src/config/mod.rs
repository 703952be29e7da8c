//! Configuration for ninety.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ChimeConfig, Config, SessionConfig};
