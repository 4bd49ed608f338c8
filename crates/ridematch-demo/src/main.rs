//! RideMatch demo runner.
//!
//! Builds a fixed snapshot of three riders and four drivers, runs the
//! matcher to exhaustion, and prints each match followed by the full ride
//! history. Logs go to stderr (`RUST_LOG`, default `warn`); the report goes
//! to stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use ridematch_dispatch::{DriverPool, MatchRun, RideHistory, RiderQueue, run_matching};
use ridematch_types::{
    DispatchConfig, DispatchError, Driver, DriverId, Result, Rider, RiderId, constants,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Riders in arrival order.
const RIDERS: [(u64, &str); 3] = [(1, "Alice"), (2, "Bob"), (3, "Charlie")];

/// Drivers as (id, distance tenths, rating tenths).
const DRIVERS: [(u64, i64, i64); 4] = [(101, 25, 48), (102, 12, 45), (103, 12, 49), (104, 30, 47)];

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Defaults, or the JSON file named by `RIDEMATCH_CONFIG`.
fn load_config() -> Result<DispatchConfig> {
    let Ok(path) = std::env::var(constants::CONFIG_ENV_VAR) else {
        return Ok(DispatchConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| DispatchError::Configuration(format!("{path}: {e}")))?;
    let config: DispatchConfig = serde_json::from_str(&raw)
        .map_err(|e| DispatchError::Configuration(format!("{path}: {e}")))?;
    config.validate()?;
    tracing::info!(%path, ?config, "Loaded dispatch config");
    Ok(config)
}

fn load_snapshot(config: &DispatchConfig) -> Result<(RiderQueue, DriverPool)> {
    let mut riders = RiderQueue::from_config(config);
    for (id, name) in RIDERS {
        riders.enqueue(Rider::new(RiderId(id), name)?)?;
    }

    let mut drivers = DriverPool::from_config(config);
    for (id, dist, rating) in DRIVERS {
        drivers.insert(Driver::new(
            DriverId(id),
            Decimal::new(dist, 1),
            Decimal::new(rating, 1),
        )?)?;
    }
    Ok((riders, drivers))
}

/// Render the report: matches, then the history, then whoever is left over.
fn write_report(
    out: &mut impl Write,
    run: &MatchRun,
    history: &RideHistory,
    riders_left: &RiderQueue,
    drivers_left: &[Driver],
) -> io::Result<()> {
    for assignment in &run.assignments {
        writeln!(out, "{assignment}")?;
    }

    writeln!(out)?;
    writeln!(out, "Ride History:")?;
    for ride_match in history {
        writeln!(out, "{ride_match}")?;
    }

    if !drivers_left.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unmatched drivers:")?;
        for driver in drivers_left {
            writeln!(out, "{driver}")?;
        }
    }
    if !riders_left.is_empty() {
        writeln!(out)?;
        writeln!(out, "Unmatched riders:")?;
        for rider in riders_left.iter() {
            writeln!(out, "{rider}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "History root: {}", hex::encode(history.root()))
}

fn run() -> Result<()> {
    let config = load_config()?;
    let (mut riders, mut drivers) = load_snapshot(&config)?;
    let mut history = RideHistory::new();

    let run = run_matching(&mut riders, &mut drivers, &mut history);
    let drivers_left = drivers.drain_sorted();

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &run, &history, &riders, &drivers_left)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    tracing::debug!(engine = constants::ENGINE_NAME, version = constants::VERSION, "Starting");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "Dispatch demo failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
