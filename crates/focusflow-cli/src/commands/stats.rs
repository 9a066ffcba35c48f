use clap::Subcommand;
use focusflow_core::CoreError;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Sessions completed today
    Today,
    /// Sessions completed in the Monday-start week containing today
    Week,
    /// All windows as JSON
    All,
    /// Per-day session counts, oldest first
    Log,
}

pub fn run(action: StatsAction) -> Result<(), CoreError> {
    let engine = super::open_engine()?;
    match action {
        StatsAction::Today => println!("{}", engine.sessions_today()),
        StatsAction::Week => println!("{}", engine.sessions_this_week()),
        StatsAction::All => {
            println!("{}", serde_json::to_string_pretty(&engine.stats())?);
        }
        StatsAction::Log => {
            for (date_key, count) in engine.session_log().iter() {
                println!("{date_key}  {count}");
            }
        }
    }
    Ok(())
}
