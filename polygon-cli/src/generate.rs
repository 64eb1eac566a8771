//! Generate command - print a fixture list for a roster
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), collect_rounds(), report()
//! - Level 3: render_text(), render_json(), render_stats()
//! - Level 4: argument definitions

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use polygon_core::{
    BalanceReport, FixtureConfig, FixtureGenerator, Games, Round, ScheduledRound,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Comma-separated team names (overrides --team-count)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub teams: Vec<String>,

    /// Number of generated teams, named "Team 1" to "Team N"
    #[arg(long, default_value = "6")]
    pub team_count: usize,

    /// Number of games (each game is one full round-robin)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub games: i64,

    /// Keep generating phases indefinitely (requires --limit)
    #[arg(long, conflicts_with = "games")]
    pub unbounded: bool,

    /// Stop after this many rounds
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output fixtures as JSON
    #[arg(long)]
    pub json: bool,

    /// Append a home/away balance report
    #[arg(long)]
    pub stats: bool,
}

/// JSON document written by `--json`
#[derive(Serialize)]
struct JsonOutput<'a> {
    teams: &'a [String],
    games: Games,
    rounds_per_phase: usize,
    rounds: Vec<JsonRound<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    balance: Option<BalanceReport<String>>,
}

#[derive(Serialize)]
struct JsonRound<'a> {
    phase: usize,
    number: usize,
    #[serde(flatten)]
    round: &'a Round<String>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run generate command
///
/// 1. Validate arguments into a fixture configuration
/// 2. Produce the requested rounds
/// 3. Print them as text or JSON
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = build_config(&args)?;
    let fixtures = config
        .build()
        .context("Failed to build fixture generator")?;

    tracing::info!(
        "Generating fixtures: {} teams, games={:?}, {} rounds per phase",
        fixtures.teams().len(),
        fixtures.games(),
        fixtures.rounds_per_phase()
    );

    let rounds = collect_rounds(&fixtures, args.limit);
    report(&fixtures, &rounds, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Turn command arguments into a validated configuration
fn build_config(args: &GenerateArgs) -> Result<FixtureConfig<String>> {
    let games = if args.unbounded {
        if args.limit.is_none() {
            bail!("--unbounded needs --limit to know when to stop");
        }
        Games::Unbounded
    } else {
        Games::from_count(args.games).context("Invalid --games value")?
    };

    let config = if args.teams.is_empty() {
        FixtureConfig::team_count(args.team_count)
    } else {
        FixtureConfig::new(args.teams.iter().map(|t| t.trim().to_string()))
    };

    Ok(config.with_games(games))
}

/// Pull rounds from the schedule, stopping at `limit` if given
fn collect_rounds(
    fixtures: &FixtureGenerator<String>,
    limit: Option<usize>,
) -> Vec<ScheduledRound<String>> {
    match limit {
        Some(limit) => fixtures.rounds().take(limit).collect(),
        None => fixtures.rounds().collect(),
    }
}

/// Print the fixture list in the requested format
fn report(
    fixtures: &FixtureGenerator<String>,
    rounds: &[ScheduledRound<String>],
    args: &GenerateArgs,
) -> Result<()> {
    let balance = args.stats.then(|| {
        BalanceReport::from_matches(rounds.iter().flat_map(|r| r.round.matches()))
    });

    if args.json {
        let json = render_json(fixtures, rounds, balance)?;
        println!("{}", json);
    } else {
        print!("{}", render_text(rounds));
        if let Some(balance) = &balance {
            print!("{}", render_stats(balance));
        }
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Each round followed by a blank line
fn render_text(rounds: &[ScheduledRound<String>]) -> String {
    rounds.iter().map(|r| format!("{}\n\n", r)).collect()
}

fn render_json(
    fixtures: &FixtureGenerator<String>,
    rounds: &[ScheduledRound<String>],
    balance: Option<BalanceReport<String>>,
) -> Result<String> {
    let output = JsonOutput {
        teams: fixtures.teams(),
        games: fixtures.games(),
        rounds_per_phase: fixtures.rounds_per_phase(),
        rounds: rounds
            .iter()
            .map(|r| JsonRound {
                phase: r.phase,
                number: r.number,
                round: &r.round,
            })
            .collect(),
        balance,
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize fixtures")
}

fn render_stats(balance: &BalanceReport<String>) -> String {
    let mut out = String::from("Balance:\n");
    for entry in balance.entries() {
        let b = &entry.balance;
        out.push_str(&format!(
            "  {}: played {}, home {}, away {}, longest streak {}\n",
            entry.team,
            b.played,
            b.home,
            b.away,
            b.longest_streak()
        ));
    }
    out.push_str(&format!(
        "Longest streak overall: {} ({})\n",
        balance.max_streak(),
        if balance.is_balanced() { "balanced" } else { "unbalanced" }
    ));
    out
}
