//! Completion alert collaborator.
//!
//! Fired best-effort when a session completes naturally. A failing or
//! absent alert never affects engine state.

use std::io::Write;

/// Audible (or otherwise) completion notification.
pub trait Alert {
    fn ring(&self);
}

/// No-op alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAlert;

impl Alert for SilentAlert {
    fn ring(&self) {}
}

/// Terminal bell (ASCII BEL). Alert failures are diagnostic: a failed
/// write is reported to stderr, then ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Alert for TerminalBell {
    fn ring(&self) {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            eprintln!("warning: unable to play timer alert: {e}");
        }
    }
}
