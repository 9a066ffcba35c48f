mod engine;
mod log;
mod settings;

pub use engine::{PersistedState, PomodoroEngine};
pub use log::SessionLog;
pub use settings::{Mode, SessionSettings};
