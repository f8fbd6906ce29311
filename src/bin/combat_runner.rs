//! Headless Combat Runner
//!
//! Plays an encounter file to the end with a simple autopilot and prints the
//! combat result. Useful for balancing fate decks and enemy patterns.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use fate_combat::combat::{Combat, CombatEvent, CombatPhase, CombatResult};
use fate_combat::core::error::Result;
use fate_combat::load_encounter;
use serde::Serialize;

/// How the autopilot spends its turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
enum Strategy {
    /// Stage every affordable card and commit one attack per turn
    Force,
    /// Influence Will-bearing targets, fall back to force otherwise
    Diplomacy,
}

/// Headless Combat Runner - autopilot over an encounter file
#[derive(Parser, Debug)]
#[command(name = "combat_runner")]
#[command(about = "Run an encounter to completion and print the combat result")]
struct Args {
    /// Encounter definition (TOML)
    #[arg(default_value = "data/encounters/leshy_grove.toml")]
    encounter: PathBuf,

    /// Autopilot strategy
    #[arg(long, value_enum, default_value_t = Strategy::Force)]
    strategy: Strategy,

    /// Override the encounter seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds if nothing is decided
    #[arg(long, default_value_t = 50)]
    max_rounds: u32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every combat event to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    encounter: String,
    strategy: Strategy,
    seed: u64,
    finished: bool,
    rounds: u32,
    events: usize,
    result: Option<CombatResult>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut definition = match load_encounter(&args.encounter) {
        Ok(definition) => definition,
        Err(e) => {
            eprintln!("Failed to load '{}': {}", args.encounter.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(seed) = args.seed {
        definition.seed = seed;
    }
    let seed = definition.seed;

    let mut combat = match Combat::new(definition) {
        Ok(combat) => combat,
        Err(e) => {
            eprintln!("Cannot start encounter: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&mut combat, args.strategy, args.max_rounds, args.verbose) {
        eprintln!("Combat aborted in round {}: {}", combat.round(), e);
        return ExitCode::FAILURE;
    }

    let summary = RunSummary {
        encounter: args.encounter.display().to_string(),
        strategy: args.strategy,
        seed,
        finished: combat.is_over(),
        rounds: combat.round(),
        events: combat.log().len(),
        result: combat.result().cloned(),
    };

    match args.format.as_str() {
        "text" => print_text(&summary),
        "json" => print_json(&summary),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            print_json(&summary);
        }
    }
    ExitCode::SUCCESS
}

fn run(combat: &mut Combat, strategy: Strategy, max_rounds: u32, verbose: bool) -> Result<()> {
    combat.begin_combat()?;

    while !combat.is_over() && combat.round() <= max_rounds {
        let mut events = player_turn(combat, strategy)?;
        combat.end_turn()?;
        if combat.phase() == CombatPhase::EnemyResolve {
            events.extend(combat.resolve_enemy_turn()?);
        }
        if verbose {
            for event in &events {
                eprintln!("  {:?}", event);
            }
        }
    }
    Ok(())
}

fn player_turn(combat: &mut Combat, strategy: Strategy) -> Result<Vec<CombatEvent>> {
    if strategy == Strategy::Diplomacy && target_has_will(combat) {
        return combat.influence();
    }

    let ids: Vec<String> = combat.hand().iter().map(|c| c.id.clone()).collect();
    for id in &ids {
        combat.select_card(id);
    }
    combat.commit_attack()
}

fn target_has_will(combat: &Combat) -> bool {
    combat
        .target()
        .and_then(|t| combat.world().health.get(t))
        .map_or(false, |h| h.has_will())
}

fn print_json(summary: &RunSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize result: {}", e),
    }
}

fn print_text(summary: &RunSummary) {
    println!("Combat Result");
    println!("=============");
    println!("Encounter: {}", summary.encounter);
    println!("Strategy: {:?}", summary.strategy);
    println!("Seed: {}", summary.seed);
    println!("Rounds: {}", summary.rounds);
    println!("Events: {}", summary.events);
    match &summary.result {
        Some(result) => {
            println!("Outcome: {:?}", result.outcome);
            println!("Player health: {}", result.player_health);
            println!("Resonance delta: {:+}", result.resonance_delta);
            println!("Final resonance: {:.1}", result.final_resonance);
            println!("Faith delta: {:+}", result.faith_delta);
            if !result.loot_card_ids.is_empty() {
                println!("Loot: {}", result.loot_card_ids.join(", "));
            }
        }
        None => println!("Outcome: undecided after {} rounds", summary.rounds),
    }
}
