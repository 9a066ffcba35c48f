//! # FocusFlow Core Library
//!
//! This library provides the core business logic for the FocusFlow Pomodoro
//! timer. All operations are available via a standalone CLI binary; any GUI
//! is expected to be a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Pomodoro Engine**: a tick-driven state machine. It has no internal
//!   threads -- the caller delivers one logical `tick()` per second while the
//!   timer is running.
//! - **Storage**: a key-value store collaborator holding one JSON record
//!   (settings + session log), write-through on every mutation. Backed by
//!   SQLite on disk, or an in-memory map for tests.
//! - **Calendar**: local-time date keys (`YYYY-MM-DD`) and Monday-start
//!   week windows used to index the session log.
//! - **Stats**: derived session counts (today / this week / all-time),
//!   recomputed on each query.
//!
//! ## Key Components
//!
//! - [`PomodoroEngine`]: core timer state machine
//! - [`KvStore`]: persisted store contract ([`SqliteStore`], [`MemoryStore`])
//! - [`SessionLog`]: per-day completed focus session counts
//! - [`Event`]: state change notifications emitted by engine operations

pub mod alert;
pub mod calendar;
pub mod error;
pub mod events;
pub mod stats;
pub mod storage;
pub mod timer;

pub use alert::{Alert, SilentAlert, TerminalBell};
pub use calendar::{FixedToday, SystemToday, Today};
pub use error::{CoreError, Result, StoreError};
pub use events::Event;
pub use stats::SessionStats;
pub use storage::{KvStore, MemoryStore, SqliteStore, POMODORO_KEY};
pub use timer::{Mode, PomodoroEngine, SessionLog, SessionSettings};
