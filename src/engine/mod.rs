//! Focus engine: session state machine, break scheduling, and history.

pub mod history;
pub mod session;

mod focus;

pub use focus::{EngineEvent, FocusEngine};
pub use history::{DayRecord, History};
pub use session::{format_mmss, Mode, Session, BREATH_SECONDS, DEFAULT_FOCUS_SECONDS};
