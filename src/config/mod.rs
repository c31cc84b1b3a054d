pub mod roster_config;

#[cfg(feature = "cli")]
use clap::Parser;

use crate::utils::error::Result;
use roster_config::RosterConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "wichtel")]
#[command(about = "Reveal your secret partner (Wichtelpartner) with your personal code")]
pub struct CliConfig {
    /// Roster TOML file. The built-in roster is used when omitted.
    #[arg(long)]
    pub roster: Option<String>,

    /// Secret code; skips the interactive prompt.
    #[arg(long)]
    pub code: Option<String>,

    /// Seed year override. Defaults to `event.year` or the current year.
    #[arg(long)]
    pub year: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Roster from `path`, or the built-in one.
pub fn load_roster(path: Option<&str>) -> Result<RosterConfig> {
    match path {
        Some(path) => {
            tracing::debug!("Loading roster from {}", path);
            RosterConfig::from_file(path)
        }
        None => RosterConfig::builtin(),
    }
}
