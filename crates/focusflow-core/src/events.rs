use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every state change in the engine produces an Event.
/// Callers (the CLI loop, a GUI) render or log them; none is required for
/// correctness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        seconds_left: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        seconds_left: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        at: DateTime<Utc>,
    },
    TimerSkipped {
        from: Mode,
        to: Mode,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        mode: Mode,
        at: DateTime<Utc>,
    },
    /// A session ran down to zero naturally. `auto_advanced` tells whether
    /// the engine flipped to the opposite mode and kept running.
    SessionCompleted {
        mode: Mode,
        auto_advanced: bool,
        at: DateTime<Utc>,
    },
    SettingsUpdated {
        focus_secs: u32,
        break_secs: u32,
        auto_switch: bool,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        is_running: bool,
        seconds_left: u32,
        total_secs: u32,
        sessions_today: u32,
        sessions_this_week: u32,
        total_sessions: u64,
        at: DateTime<Utc>,
    },
}
