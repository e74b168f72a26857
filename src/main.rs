// Standings assistant entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not the terminal)
// 2. Load config
// 3. Load the baseline points-table snapshot
// 4. Dispatch the requested command

use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;

use standings_assistant::config::{self, Config};
use standings_assistant::overs::BALLS_PER_OVER;
use standings_assistant::report;
use standings_assistant::scenario::{evaluate_scenario, ScenarioKind, ScenarioRequest};
use standings_assistant::simulate::{apply_match_outcome, MatchOutcome};
use standings_assistant::table::loader;
use standings_assistant::table::rank::rank_table;
use standings_assistant::table::StandingsTable;

const USAGE: &str = "\
Usage: crickcast <command>

Commands:
  table
      Print the current points table.
  simulate <your-team> <opponent> <your-runs> <your-overs> <opp-runs> <opp-overs>
      Apply one exact match outcome and print the updated table.
  scenario <your-team> <opponent> <position> batting|bowling <runs> [--json]
      Find the outcome range that places your team at or above <position>.
      batting: you set <runs> batting first; the opponent's score is searched.
      bowling: the opponent set <runs>; your chase duration is searched.
";

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not the terminal)
    init_tracing()?;
    info!("standings assistant starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: tournament={}, {} overs per innings",
        config.tournament.name, config.tournament.match_overs
    );

    // 3. Load the baseline snapshot
    let baseline = loader::load_table(Path::new(&config.data_paths.points_table))
        .context("failed to load points table")?;
    info!(
        "Loaded {} teams from {} (as of {})",
        baseline.len(),
        config.data_paths.points_table,
        config.tournament.as_of
    );

    // 4. Dispatch
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("table") => cmd_table(&baseline),
        Some("simulate") => cmd_simulate(&config, &baseline, &args[1..]),
        Some("scenario") => cmd_scenario(&config, &baseline, &args[1..]),
        _ => {
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    }
}

fn cmd_table(baseline: &StandingsTable) -> anyhow::Result<()> {
    print!("{}", report::render_table(&rank_table(baseline)));
    Ok(())
}

fn cmd_simulate(config: &Config, baseline: &StandingsTable, args: &[String]) -> anyhow::Result<()> {
    let [your_team, opponent, your_runs, your_overs, opp_runs, opp_overs] = args else {
        bail!("simulate expects 6 arguments\n\n{USAGE}");
    };

    let outcome = MatchOutcome {
        team_a: your_team.clone(),
        team_b: opponent.clone(),
        runs_a: parse_count(your_runs, "your-runs")?,
        overs_a: your_overs.clone(),
        runs_b: parse_count(opp_runs, "opp-runs")?,
        overs_b: opp_overs.clone(),
    };
    let max_balls = config.tournament.match_overs * BALLS_PER_OVER;

    let updated = apply_match_outcome(baseline, &outcome, max_balls)?;
    info!(
        "Simulated {} {} vs {} {}",
        your_team, outcome.runs_a, opponent, outcome.runs_b
    );

    for key in [your_team, opponent] {
        if let Some(team) = updated.find_team_index(key).and_then(|i| updated.get(i)) {
            println!(
                "{}: {} pts, {}-{}-{} ({} NRR)",
                team.name,
                team.points,
                team.won,
                team.lost,
                team.ties(),
                report::format_nrr(team.nrr),
            );
        }
    }
    println!();
    print!("{}", report::render_table(&updated));
    Ok(())
}

fn cmd_scenario(config: &Config, baseline: &StandingsTable, args: &[String]) -> anyhow::Result<()> {
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();
    let [your_team, opponent, position, toss, runs] = positional[..] else {
        bail!("scenario expects 5 arguments\n\n{USAGE}");
    };

    let runs = parse_count(runs, "runs")?;
    let kind = match toss.as_str() {
        "batting" => ScenarioKind::Defending { your_runs: runs },
        "bowling" => ScenarioKind::Chasing { opponent_runs: runs },
        other => bail!("toss result must be `batting` or `bowling`, got `{other}`"),
    };

    let request = ScenarioRequest {
        your_team: your_team.clone(),
        opponent: opponent.clone(),
        desired_position: position
            .parse()
            .with_context(|| format!("position must be a positive integer, got `{position}`"))?,
        match_overs: config.tournament.match_overs.to_string(),
        kind,
    };
    let max_search_balls = config.search.max_match_overs * BALLS_PER_OVER;

    let outcome = evaluate_scenario(baseline, &request, max_search_balls)?;
    info!(
        "Scenario {} vs {} position {}: achievable={}",
        your_team,
        opponent,
        request.desired_position,
        outcome.is_achievable()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!(
            "{}",
            report::scenario_message(
                &display_name(baseline, your_team),
                &display_name(baseline, opponent),
                &outcome
            )
        );
    }
    Ok(())
}

/// Display name for a team key, falling back to the key itself.
fn display_name(baseline: &StandingsTable, key: &str) -> String {
    baseline
        .find_team_index(key)
        .and_then(|index| baseline.get(index))
        .map(|team| team.name.clone())
        .unwrap_or_else(|| key.to_string())
}

fn parse_count(value: &str, field: &str) -> anyhow::Result<u32> {
    value
        .parse()
        .with_context(|| format!("{field} must be a non-negative integer, got `{value}`"))
}

/// Initialize tracing to log to a file (not the terminal, which carries the
/// report output).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("crickcast.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("standings_assistant=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
