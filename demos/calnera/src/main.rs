//! calnera: a year of tanker traffic around the Calnera archipelago.
//!
//! Usage: `calnera [config.json]`.  Without a config file the defaults below
//! apply; `RUST_LOG=debug` shows the per-day hook and record lines.

mod catalog;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cc_core::{NavParams, TurnConfig};
use cc_fleet::{RosterBuilder, load_ships_reader};
use cc_ops::LoggingOperations;
use cc_output::{CsvWriter, TurnOutputObserver};
use cc_schedule::load_plans_reader;
use cc_sim::SchedulerBuilder;

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    months:     u32,
    output_dir: PathBuf,
    /// Ship snapshots every N days (0 = never).
    snapshot_every_days: u32,
    nav:        NavParams,
    turn:       TurnConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            months:              12,
            output_dir:          PathBuf::from("output/calnera"),
            snapshot_every_days: 1,
            nav:                 NavParams::default(),
            turn:                TurnConfig::default(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    info!(?config, "configuration loaded");

    // 1. Catalog → roster.
    let ship_specs = load_ships_reader(Cursor::new(catalog::SHIPS_CSV))?;
    let (roster, ships) = RosterBuilder::new()
        .targets(catalog::targets())
        .ships(ship_specs)
        .build()?;
    println!(
        "Roster: {} targets ({} islands), {} ships, {} unresolved destinations",
        roster.len(),
        roster.islands().count(),
        ships.len(),
        roster.unresolved().len(),
    );

    // 2. Scheduler.
    let plans = load_plans_reader(Cursor::new(catalog::PLANS_CSV))?;
    let mut scheduler = SchedulerBuilder::new(roster)
        .config(config.turn.clone())
        .nav_params(config.nav.clone())
        .plans(plans)
        .operations(LoggingOperations)
        .build()?;

    // 3. Output.
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    let writer = CsvWriter::new(&config.output_dir)?;
    let mut observer = TurnOutputObserver::new(writer).snapshot_every(config.snapshot_every_days);

    // 4. Turns.  The host plans one month ahead of the horizon each turn.
    println!(
        "Starting in {}; planning horizon {} months ({})",
        scheduler.current_month(),
        scheduler.config().planning_horizon,
        scheduler.planning_month(),
    );
    let t0 = Instant::now();
    let mut ships = ships;
    for _ in 0..config.months {
        let outcome = scheduler.advance_month(ships, &mut observer);
        let summary = &outcome.summary;
        println!(
            "{:<9} turn {:>3}: {} days, {} collision days, totals {:?} → plan {}",
            outcome.new_month,
            summary.turn,
            summary.day_count,
            summary.collision_days,
            summary.decision_totals,
            outcome.future_month,
        );
        for ship in outcome.ships.iter().filter(|s| !s.is_stationary()) {
            println!(
                "    {:<16} ({:>7.2}, {:>7.2})  hdg {:>6.1}",
                ship.name, ship.position.x, ship.position.y, ship.heading,
            );
        }

        let turn = summary.turn;
        scheduler.plan_for_month(
            outcome.future_month,
            json!({ "production_bpd": 100_000 + 5_000 * turn, "charters": 1 }),
        );
        ships = outcome.ships;
    }

    observer.finish().context("writing output")?;
    println!(
        "Ran {} months in {:.1?}; {} daily records retained; output in {}",
        config.months,
        t0.elapsed(),
        scheduler.daily_log().len(),
        config.output_dir.display(),
    );
    Ok(())
}
