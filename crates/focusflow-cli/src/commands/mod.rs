pub mod config;
pub mod stats;
pub mod timer;

use focusflow_core::{CoreError, PomodoroEngine, SqliteStore, SystemToday, TerminalBell};

/// Open the on-disk store and build an engine around it. Countdown state is
/// transient, so every invocation starts paused at a full Focus countdown;
/// settings and the session log come from the store.
pub(crate) fn open_engine() -> Result<PomodoroEngine, CoreError> {
    let store = SqliteStore::open()?;
    Ok(PomodoroEngine::new(
        Box::new(store),
        Box::new(TerminalBell),
        Box::new(SystemToday),
    ))
}
