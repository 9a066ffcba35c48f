use std::io::Write;
use std::time::Duration;

use clap::{Subcommand, ValueEnum};
use focusflow_core::{CoreError, Event, Mode, PomodoroEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Focus,
    Break,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Focus => Mode::Focus,
            ModeArg::Break => Mode::Break,
        }
    }
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the countdown in the foreground until it stops
    Run {
        /// Mode to start in
        #[arg(long, value_enum, default_value_t = ModeArg::Focus)]
        mode: ModeArg,
    },
    /// Print current timer state and session stats as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), CoreError> {
    match action {
        TimerAction::Status => {
            let engine = super::open_engine()?;
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
            Ok(())
        }
        TimerAction::Run { mode } => run_countdown(mode.into()),
    }
}

/// Foreground countdown loop: one engine tick per elapsed second, no
/// catch-up when the process is delayed. The loop is the engine's clock
/// subscription -- it ends as soon as the engine stops running.
fn run_countdown(mode: Mode) -> Result<(), CoreError> {
    let mut engine = super::open_engine()?;
    if engine.mode() != mode {
        engine.switch_to_mode(mode);
    }
    engine.toggle_running();
    render_countdown(&engine);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(async {
        let mut clock = tokio::time::interval(Duration::from_secs(1));
        clock.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        clock.tick().await; // the first tick resolves immediately

        while engine.is_running() {
            clock.tick().await;
            let event = engine.tick();
            render_countdown(&engine);
            if let Some(Event::SessionCompleted { mode, .. }) = event {
                println!();
                println!(
                    "{} session complete ({} today, {} this week)",
                    mode.as_str(),
                    engine.sessions_today(),
                    engine.sessions_this_week(),
                );
            }
        }
    });
    println!();
    Ok(())
}

/// Cosmetic once-per-second redraw: not a diagnostic surface, so write
/// failures are dropped outright rather than reported like alert failures.
fn render_countdown(engine: &PomodoroEngine) {
    let secs = engine.seconds_left();
    print!("\r{:>5} {:02}:{:02}", engine.mode().as_str(), secs / 60, secs % 60);
    let _ = std::io::stdout().flush();
}
