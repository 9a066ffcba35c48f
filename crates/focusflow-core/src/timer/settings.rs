use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Focus,
    Break,
}

impl Mode {
    pub fn opposite(self) -> Self {
        match self {
            Mode::Focus => Mode::Break,
            Mode::Break => Mode::Focus,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::Break => "break",
        }
    }
}

/// Focus duration bounds, in seconds (5-90 minutes).
pub const FOCUS_SECS_MIN: u32 = 300;
pub const FOCUS_SECS_MAX: u32 = 5400;
/// Break duration bounds, in seconds (3-30 minutes).
pub const BREAK_SECS_MIN: u32 = 180;
pub const BREAK_SECS_MAX: u32 = 1800;

const DEFAULT_FOCUS_SECS: u32 = 25 * 60;
const DEFAULT_BREAK_SECS: u32 = 5 * 60;

/// Session configuration: per-mode durations and the auto-switch flag.
///
/// Durations are clamped into their bounds at construction and again when
/// loaded from the store, so a value read from this struct is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_focus_secs")]
    pub focus_secs: u32,
    #[serde(default = "default_break_secs")]
    pub break_secs: u32,
    #[serde(default = "default_true")]
    pub auto_switch: bool,
}

fn default_focus_secs() -> u32 {
    DEFAULT_FOCUS_SECS
}
fn default_break_secs() -> u32 {
    DEFAULT_BREAK_SECS
}
fn default_true() -> bool {
    true
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            focus_secs: DEFAULT_FOCUS_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            auto_switch: true,
        }
    }
}

impl SessionSettings {
    /// Build settings from raw minute inputs.
    ///
    /// A missing, non-finite, or zero value falls back to the default
    /// (25 focus / 5 break minutes); anything else is clamped into
    /// 5-90 focus / 3-30 break minutes. Inputs never error.
    pub fn from_raw_minutes(focus: Option<f64>, brk: Option<f64>, auto: bool) -> Self {
        Self {
            focus_secs: clamp_minutes(focus, 5.0, 90.0, DEFAULT_FOCUS_SECS),
            break_secs: clamp_minutes(brk, 3.0, 30.0, DEFAULT_BREAK_SECS),
            auto_switch: auto,
        }
    }

    /// Configured duration of `mode`, in seconds.
    pub fn duration_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_secs,
            Mode::Break => self.break_secs,
        }
    }

    /// Copy with both durations forced back into their bounds. Applied to
    /// records loaded from the store, which may predate the bounds or have
    /// been edited by hand.
    pub fn clamped(self) -> Self {
        Self {
            focus_secs: self.focus_secs.clamp(FOCUS_SECS_MIN, FOCUS_SECS_MAX),
            break_secs: self.break_secs.clamp(BREAK_SECS_MIN, BREAK_SECS_MAX),
            auto_switch: self.auto_switch,
        }
    }
}

fn clamp_minutes(raw: Option<f64>, min: f64, max: f64, default_secs: u32) -> u32 {
    match raw {
        Some(v) if v.is_finite() && v != 0.0 => (v.clamp(min, max) * 60.0).round() as u32,
        _ => default_secs,
    }
}
