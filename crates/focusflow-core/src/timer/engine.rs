//! Pomodoro engine implementation.
//!
//! The engine is a tick-driven state machine. It does not use internal
//! threads -- an external clock delivers one logical `tick()` per second
//! while the timer is running. Delayed ticks simply lose wall-clock
//! accuracy; there is no catch-up.
//!
//! ## State Transitions
//!
//! States are (mode in {Focus, Break}) x (running in {true, false}), with
//! `seconds_left` as continuous substate:
//!
//! ```text
//! toggle_running: running <-> paused (resume from 0 reseeds first)
//! tick:           seconds_left -= 1 (saturating), then check_completion
//! completion:     alert -> log (Focus only) -> auto-switch or stop
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::new(store, alert, today);
//! engine.toggle_running();
//! // Once per second while running:
//! engine.tick(); // Returns Some(Event::SessionCompleted) on completion
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::log::SessionLog;
use super::settings::{Mode, SessionSettings};
use crate::alert::Alert;
use crate::calendar::{self, Today};
use crate::events::Event;
use crate::stats::SessionStats;
use crate::storage::{self, KvStore, POMODORO_KEY};

/// The record persisted under [`POMODORO_KEY`]: settings and session log,
/// flattened into one JSON object. Countdown state is transient and never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(flatten)]
    pub settings: SessionSettings,
    #[serde(default)]
    pub session_log: SessionLog,
}

/// Core pomodoro engine.
///
/// Owns its settings, countdown state, and session log for its lifetime.
/// Collaborators are injected: a key-value store (write-through persistence
/// after every mutation of a persisted field), an alert fired best-effort
/// on completion, and a date source indexing the session log.
///
/// Operations never fail: malformed persisted input degrades to defaults at
/// load time, invalid settings input is clamped, and store/alert failures
/// are swallowed by the collaborators themselves.
pub struct PomodoroEngine {
    settings: SessionSettings,
    log: SessionLog,
    mode: Mode,
    is_running: bool,
    seconds_left: u32,
    store: Box<dyn KvStore>,
    alert: Box<dyn Alert>,
    today: Box<dyn Today>,
}

impl PomodoroEngine {
    /// Create an engine, loading settings and log from `store` (defaults /
    /// empty when absent or malformed). Starts paused in Focus mode with a
    /// full countdown.
    pub fn new(store: Box<dyn KvStore>, alert: Box<dyn Alert>, today: Box<dyn Today>) -> Self {
        let persisted = storage::load_json(store.as_ref(), POMODORO_KEY, PersistedState::default());
        let settings = persisted.settings.clamped();
        Self {
            seconds_left: settings.focus_secs,
            settings,
            log: persisted.session_log,
            mode: Mode::Focus,
            is_running: false,
            store,
            alert,
            today,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Configured duration of the current mode, in seconds.
    pub fn total_secs(&self) -> u32 {
        self.settings.duration_for(self.mode)
    }

    pub fn sessions_today(&self) -> u32 {
        self.stats().today
    }

    pub fn sessions_this_week(&self) -> u32 {
        self.stats().this_week
    }

    pub fn total_sessions(&self) -> u64 {
        self.stats().total
    }

    /// Recompute all derived metrics from the log.
    pub fn stats(&self) -> SessionStats {
        SessionStats::collect(&self.log, self.today.today())
    }

    pub fn session_log(&self) -> &SessionLog {
        &self.log
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let stats = self.stats();
        Event::StateSnapshot {
            mode: self.mode,
            is_running: self.is_running,
            seconds_left: self.seconds_left,
            total_secs: self.total_secs(),
            sessions_today: stats.today,
            sessions_this_week: stats.this_week,
            total_sessions: stats.total,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Flip between running and paused.
    ///
    /// Resuming a countdown that already sits at zero (a non-auto-switched
    /// completion) reseeds the *current* mode's full duration first -- the
    /// mode does not advance on manual restart.
    pub fn toggle_running(&mut self) -> Option<Event> {
        if self.is_running {
            self.is_running = false;
            Some(Event::TimerPaused {
                seconds_left: self.seconds_left,
                at: Utc::now(),
            })
        } else {
            if self.seconds_left == 0 {
                self.seconds_left = self.total_secs();
            }
            self.is_running = true;
            Some(Event::TimerStarted {
                mode: self.mode,
                seconds_left: self.seconds_left,
                at: Utc::now(),
            })
        }
    }

    /// Deliver one logical second. Meaningful only while running; a paused
    /// engine ignores ticks entirely. Returns the completion event when the
    /// countdown reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running {
            return None;
        }
        self.seconds_left = self.seconds_left.saturating_sub(1);
        self.check_completion()
    }

    /// Completion transition, invoked immediately after each tick.
    ///
    /// Order is fixed: alert, then log (Focus completions only), then
    /// either auto-switch to the opposite mode (staying running) or stop
    /// with the countdown left at zero.
    fn check_completion(&mut self) -> Option<Event> {
        if !self.is_running || self.seconds_left > 0 {
            return None;
        }

        self.alert.ring();

        let completed = self.mode;
        if completed == Mode::Focus {
            let today = calendar::date_key(self.today.today());
            self.log.record(&today);
        }

        let auto_advanced = self.settings.auto_switch;
        if auto_advanced {
            self.mode = self.mode.opposite();
            self.seconds_left = self.total_secs();
        } else {
            self.is_running = false;
        }

        self.persist();
        Some(Event::SessionCompleted {
            mode: completed,
            auto_advanced,
            at: Utc::now(),
        })
    }

    /// Stop and reseed the current mode's full duration.
    pub fn reset_timer(&mut self) -> Option<Event> {
        self.is_running = false;
        self.seconds_left = self.total_secs();
        Some(Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    /// Stop, flip to the opposite mode, and reseed. Skipping is not a
    /// completion: the session log is never touched.
    pub fn skip_mode(&mut self) -> Option<Event> {
        let from = self.mode;
        self.is_running = false;
        self.mode = self.mode.opposite();
        self.seconds_left = self.total_secs();
        Some(Event::TimerSkipped {
            from,
            to: self.mode,
            at: Utc::now(),
        })
    }

    /// Stop and jump straight to `target`, reseeding its full duration.
    pub fn switch_to_mode(&mut self, target: Mode) -> Option<Event> {
        self.mode = target;
        self.is_running = false;
        self.seconds_left = self.total_secs();
        Some(Event::ModeSwitched {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    /// Apply raw settings input (see [`SessionSettings::from_raw_minutes`]
    /// for the clamping rules). Stops the countdown and reseeds the current
    /// mode with the new duration.
    pub fn update_settings(
        &mut self,
        focus_min: Option<f64>,
        break_min: Option<f64>,
        auto: bool,
    ) -> Option<Event> {
        self.settings = SessionSettings::from_raw_minutes(focus_min, break_min, auto);
        self.is_running = false;
        self.seconds_left = self.total_secs();
        self.persist();
        Some(Event::SettingsUpdated {
            focus_secs: self.settings.focus_secs,
            break_secs: self.settings.break_secs,
            auto_switch: self.settings.auto_switch,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Write-through persistence of the settings + log record. Failures
    /// are reported and swallowed by the store helper; in-memory state is
    /// already correct either way.
    fn persist(&self) {
        let record = PersistedState {
            settings: self.settings,
            session_log: self.log.clone(),
        };
        storage::save_json(self.store.as_ref(), POMODORO_KEY, &record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::SilentAlert;
    use crate::calendar::FixedToday;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine_on(store: MemoryStore, today: NaiveDate) -> PomodoroEngine {
        PomodoroEngine::new(
            Box::new(store),
            Box::new(SilentAlert),
            Box::new(FixedToday(today)),
        )
    }

    fn fresh_engine() -> PomodoroEngine {
        engine_on(MemoryStore::new(), day(2026, 8, 26))
    }

    #[test]
    fn starts_paused_with_full_focus_countdown() {
        let engine = fresh_engine();
        assert_eq!(engine.mode(), Mode::Focus);
        assert!(!engine.is_running());
        assert_eq!(engine.seconds_left(), 1500);
    }

    #[test]
    fn tick_is_ignored_while_paused() {
        let mut engine = fresh_engine();
        assert!(engine.tick().is_none());
        assert_eq!(engine.seconds_left(), 1500);
    }

    #[test]
    fn toggle_pause_resume() {
        let mut engine = fresh_engine();
        engine.toggle_running();
        assert!(engine.is_running());
        engine.tick();
        assert_eq!(engine.seconds_left(), 1499);

        engine.toggle_running();
        assert!(!engine.is_running());
        engine.tick();
        assert_eq!(engine.seconds_left(), 1499);
    }

    #[test]
    fn focus_completion_without_auto_switch_stops_at_zero() {
        let mut engine = fresh_engine();
        engine.update_settings(Some(5.0), Some(3.0), false);
        engine.toggle_running();

        for _ in 0..299 {
            assert!(engine.tick().is_none());
        }
        let event = engine.tick();
        assert!(matches!(
            event,
            Some(Event::SessionCompleted {
                mode: Mode::Focus,
                auto_advanced: false,
                ..
            })
        ));
        assert!(!engine.is_running());
        assert_eq!(engine.seconds_left(), 0);
        assert_eq!(engine.mode(), Mode::Focus);
        assert_eq!(engine.sessions_today(), 1);

        // Manual restart reseeds the *same* mode, not the opposite one.
        engine.toggle_running();
        assert!(engine.is_running());
        assert_eq!(engine.mode(), Mode::Focus);
        assert_eq!(engine.seconds_left(), 300);
    }

    #[test]
    fn focus_completion_with_auto_switch_enters_break_running() {
        let mut engine = fresh_engine();
        engine.update_settings(Some(5.0), Some(3.0), true);
        engine.toggle_running();

        for _ in 0..300 {
            engine.tick();
        }
        assert!(engine.is_running());
        assert_eq!(engine.mode(), Mode::Break);
        assert_eq!(engine.seconds_left(), 180);
        assert_eq!(engine.sessions_today(), 1);
    }

    #[test]
    fn break_completion_never_logs() {
        let mut engine = fresh_engine();
        engine.update_settings(Some(5.0), Some(3.0), true);
        engine.switch_to_mode(Mode::Break);
        engine.toggle_running();

        for _ in 0..180 {
            engine.tick();
        }
        // Auto-switched back into Focus, nothing logged.
        assert_eq!(engine.mode(), Mode::Focus);
        assert_eq!(engine.sessions_today(), 0);
        assert_eq!(engine.total_sessions(), 0);
    }

    #[test]
    fn skip_never_logs_even_at_zero() {
        let mut engine = fresh_engine();
        engine.update_settings(Some(5.0), Some(3.0), false);
        engine.toggle_running();
        for _ in 0..300 {
            engine.tick();
        }
        assert_eq!(engine.total_sessions(), 1);

        engine.skip_mode();
        assert_eq!(engine.mode(), Mode::Break);
        assert!(!engine.is_running());
        assert_eq!(engine.seconds_left(), 180);
        assert_eq!(engine.total_sessions(), 1);
    }

    #[test]
    fn reset_stops_and_reseeds_current_mode() {
        let mut engine = fresh_engine();
        engine.toggle_running();
        engine.tick();
        engine.tick();
        engine.reset_timer();
        assert!(!engine.is_running());
        assert_eq!(engine.seconds_left(), 1500);
        assert_eq!(engine.mode(), Mode::Focus);
    }

    #[test]
    fn switch_to_mode_stops_and_reseeds_target() {
        let mut engine = fresh_engine();
        engine.toggle_running();
        engine.switch_to_mode(Mode::Break);
        assert!(!engine.is_running());
        assert_eq!(engine.mode(), Mode::Break);
        assert_eq!(engine.seconds_left(), 300);
    }

    #[test]
    fn update_settings_reseeds_current_mode_with_new_duration() {
        let mut engine = fresh_engine();
        engine.switch_to_mode(Mode::Break);
        engine.update_settings(Some(50.0), Some(10.0), true);
        assert_eq!(engine.seconds_left(), 600);
        assert!(!engine.is_running());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut engine = fresh_engine();
        engine.update_settings(Some(5.0), Some(3.0), false);
        engine.toggle_running();

        let mut completions = 0;
        for _ in 0..400 {
            if matches!(engine.tick(), Some(Event::SessionCompleted { .. })) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(engine.seconds_left(), 0);
        assert_eq!(engine.sessions_today(), 1);
    }

    #[test]
    fn malformed_persisted_record_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.kv_set(POMODORO_KEY, "{broken").unwrap();
        let engine = engine_on(store, day(2026, 8, 26));
        assert_eq!(*engine.settings(), SessionSettings::default());
        assert_eq!(engine.total_sessions(), 0);
    }

    proptest! {
        // The countdown is bounded above by the current mode's configured
        // duration under any operation sequence (and below by zero, which
        // the unsigned type makes structural).
        #[test]
        fn seconds_left_stays_within_mode_duration(ops in proptest::collection::vec(0u8..6, 1..200)) {
            let mut engine = fresh_engine();
            for op in ops {
                match op {
                    0 => { engine.toggle_running(); }
                    1 => { engine.tick(); }
                    2 => { engine.reset_timer(); }
                    3 => { engine.skip_mode(); }
                    4 => { engine.switch_to_mode(Mode::Break); }
                    _ => { engine.update_settings(Some(5.0), Some(3.0), true); }
                }
                prop_assert!(engine.seconds_left() <= engine.total_secs());
            }
        }
    }

    #[test]
    fn out_of_bounds_persisted_durations_are_clamped_on_load() {
        let store = MemoryStore::new();
        store
            .kv_set(
                POMODORO_KEY,
                r#"{"focus_secs":10,"break_secs":99999,"auto_switch":false,"session_log":{}}"#,
            )
            .unwrap();
        let engine = engine_on(store, day(2026, 8, 26));
        assert_eq!(engine.settings().focus_secs, 300);
        assert_eq!(engine.settings().break_secs, 1800);
        assert!(!engine.settings().auto_switch);
    }
}
