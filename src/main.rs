use clap::Parser;
use wichtel::adapters::{SystemClock, TerminalDialog};
use wichtel::config::load_roster;
use wichtel::utils::{logger, validation::Validate};
use wichtel::{CliConfig, MatchingFlow, WichtelError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wichtel");
    tracing::debug!(
        roster = ?config.roster,
        year = ?config.year,
        preset_code = config.code.is_some(),
        "CLI config"
    );

    if let Err(e) = run(config) {
        match e {
            // the dialog has already told the user
            WichtelError::UnrecognizedSecret => {}
            ref e => {
                tracing::error!(
                    "Session failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
        std::process::exit(e.severity().exit_code());
    }
}

fn run(config: CliConfig) -> Result<(), WichtelError> {
    let roster_config = load_roster(config.roster.as_deref())?;
    roster_config.validate()?;

    let seed_year = roster_config.seed_year(config.year, &SystemClock);
    tracing::debug!(
        seed_year,
        participants = roster_config.participants.len(),
        "Roster loaded"
    );

    let dialog = TerminalDialog::stdio().with_preset_answer(config.code);
    let mut flow = MatchingFlow::new(roster_config.roster(), seed_year, dialog)
        .with_messages(roster_config.messages.clone())
        .with_organizer(roster_config.organizer());

    flow.run()?;
    Ok(())
}
