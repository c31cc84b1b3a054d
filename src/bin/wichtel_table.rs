use anyhow::Context;
use clap::{Parser, ValueEnum};
use wichtel::adapters::SystemClock;
use wichtel::config::load_roster;
use wichtel::utils::{logger, validation::Validate};
use wichtel::{draw_table, Pairing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Organizer view: print every giver -> receiver pair of a draw.
#[derive(Parser)]
#[command(name = "wichtel-table")]
#[command(about = "Print the full draw table for a seed year")]
struct Args {
    /// Roster TOML file. The built-in roster is used when omitted.
    #[arg(long)]
    roster: Option<String>,

    /// Seed year override. Defaults to `event.year` or the current year.
    #[arg(long)]
    year: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn render_text(seed_year: u32, table: &[Pairing]) -> String {
    let width = table.iter().map(|p| p.giver.len()).max().unwrap_or(0);
    let mut out = format!("Draw for {} ({} participants)\n", seed_year, table.len());
    for pairing in table {
        let marker = if pairing.giver == pairing.receiver {
            "  (self)"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<width$} -> {}{}\n",
            pairing.giver,
            pairing.receiver,
            marker,
            width = width
        ));
    }
    out
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let config = load_roster(args.roster.as_deref())
        .with_context(|| format!("loading roster {:?}", args.roster))?;
    config.validate().context("validating roster")?;

    let seed_year = config.seed_year(args.year, &SystemClock);
    let table = draw_table(&config.roster(), seed_year);

    let self_draws = table.iter().filter(|p| p.giver == p.receiver).count();
    if self_draws > 0 {
        tracing::warn!(self_draws, seed_year, "Draw contains self-assignments");
    }

    match args.format {
        OutputFormat::Text => print!("{}", render_text(seed_year, &table)),
        OutputFormat::Json => {
            let body = serde_json::json!({
                "event": config.event.name,
                "seed_year": seed_year,
                "pairings": table,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
