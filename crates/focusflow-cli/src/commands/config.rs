use clap::Subcommand;
use focusflow_core::CoreError;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current session settings
    Show,
    /// Update session settings
    Set {
        /// Focus minutes (5-90; non-numeric input falls back to 25)
        #[arg(long)]
        focus: Option<String>,
        /// Break minutes (3-30; non-numeric input falls back to 5)
        #[arg(long = "break")]
        break_min: Option<String>,
        /// Automatically start the opposite mode on completion
        #[arg(long)]
        auto: Option<bool>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    let mut engine = super::open_engine()?;
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(engine.settings())?);
        }
        ConfigAction::Set {
            focus,
            break_min,
            auto,
        } => {
            let current = *engine.settings();
            let focus = raw_minutes(focus, current.focus_secs);
            let break_min = raw_minutes(break_min, current.break_secs);
            let auto = auto.unwrap_or(current.auto_switch);
            engine.update_settings(focus, break_min, auto);
            println!("{}", serde_json::to_string_pretty(engine.settings())?);
        }
    }
    Ok(())
}

/// An omitted flag keeps the current value. A provided value is parsed as
/// raw minutes; junk input parses to `None` and falls through to the
/// engine's default, matching the settings contract.
fn raw_minutes(arg: Option<String>, current_secs: u32) -> Option<f64> {
    match arg {
        Some(raw) => raw.trim().parse::<f64>().ok(),
        None => Some(f64::from(current_secs) / 60.0),
    }
}
