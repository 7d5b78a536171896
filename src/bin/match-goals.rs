//! CLI tool to total a team's goals from a match-results CSV file.
//!
//! Usage:
//!   match-goals [results.csv] [-t TEAM] [--tournament NAME] [-w KEY=VALUE]... [-m MODE]
//!
//! The total is written to stdout; progress and errors go to stderr.

use clap::Parser;
use matchquery::{Mode, Pipeline, Query, QuerySpec, Result, load_records};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Sum the goals a team scored in matches selected by field filters.
///
/// Matches are narrowed to one tournament, then by any --where filters, then
/// to games the team played home or away.
#[derive(Parser)]
#[command(name = "match-goals")]
struct Cli {
    /// Match results file (comma-separated, header on the first line)
    #[arg(default_value = "csv/results.csv")]
    input: PathBuf,

    /// Team whose goals are summed
    #[arg(short, long, default_value = "Italy")]
    team: String,

    /// Only count matches from this tournament (empty to count all)
    #[arg(long, default_value = "FIFA World Cup")]
    tournament: String,

    /// Extra filter as field[__lt|le|eq|ne|ge|gt]=value (repeatable)
    #[arg(short = 'w', long = "where", value_name = "KEY=VALUE")]
    filters: Vec<String>,

    /// How --where filters combine: all/and or any/or
    #[arg(short, long, default_value = "any")]
    mode: String,

    /// Log each selection stage on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<i64> {
    let mode = cli.mode.parse::<Mode>()?;
    let records = load_records(&cli.input)?;
    let mut pipeline = Pipeline::new(records);

    if !cli.tournament.is_empty() {
        pipeline = pipeline.select(&Query::any().eq("tournament", cli.tournament.as_str()));
    }

    if !cli.filters.is_empty() {
        let mut spec = QuerySpec::new().with("mode", mode.to_string());
        for pair in &cli.filters {
            spec.parse_pair(pair)?;
        }
        pipeline = pipeline.select_spec(spec)?;
    }

    let team = cli.team.as_str();
    pipeline = pipeline.select(&Query::any().eq("home_team", team).eq("away_team", team));
    debug!(matches = pipeline.count(), team, "summing goals");

    pipeline.sum_goals(team)
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over --verbose
    let default_filter = if cli.verbose {
        "matchquery=debug,match_goals=debug"
    } else {
        "matchquery=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    eprintln!("{} games", cli.team);

    match run(&cli) {
        Ok(total) => println!("{total}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
