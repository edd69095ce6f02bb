use anyhow::Context;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use mlb_scoreboard::cli::Args;
use mlb_scoreboard::clock::league_today;
use mlb_scoreboard::presenter::present;
use mlb_scoreboard::provider::GameDataProvider;
use mlb_scoreboard::request::RequestDescriptor;
use mlb_scoreboard::source::MlbScoreboard;

#[instrument(skip_all, fields(date = %request.date))]
fn run(request: &RequestDescriptor) -> anyhow::Result<()> {
    let provider = GameDataProvider::new(MlbScoreboard::new(request.base_url.as_str()));
    let dataset = provider
        .fetch(request.date, &request.cache_directory, request.source_mode)
        .with_context(|| format!("could not get games for {}", request.date))?;

    let mut shown = 0usize;
    for game in dataset.games() {
        let text = present(game, request.team_filter, request.run_threshold);
        if !text.is_empty() {
            println!("{}", text);
            shown += 1;
        }
    }

    match request.team_filter {
        Some(team) if shown == 0 => info!(team, "No game for team on this date"),
        _ => info!(games = dataset.len(), shown, "Printed results"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Logs go to stderr so stdout only carries results
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let request = RequestDescriptor::resolve(&args, league_today())?;
    run(&request)
}
