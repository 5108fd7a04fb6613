//! Fleet Crucible - Entry Point
//!
//! Command-line front end for dataset generation: rolls random fleet
//! matchups, fights each one many times through the deterministic battle
//! engine, and writes the smoothed outcome statistics to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use clap::Parser;

use fleet_crucible::core::config::GeneratorConfig;
use fleet_crucible::core::error::Result;
use fleet_crucible::dataset::{generator, writer, MatchupRecord};

/// Generate fleet combat outcome datasets via Monte-Carlo simulation
#[derive(Parser, Debug)]
#[command(name = "fleet-crucible")]
#[command(about = "Generate fleet combat outcome datasets for model training")]
struct Args {
    /// Number of matchups in the generated dataset
    #[arg(long, default_value_t = 1000)]
    dataset_size: u32,

    /// Battles fought per matchup to smooth outcome statistics
    #[arg(long, default_value_t = 100)]
    smooth_size: u32,

    /// Max number of ships in one unit group in one battle
    #[arg(long, default_value_t = 10_000)]
    max_ships: u32,

    /// Max tech level of a combatant
    #[arg(long, default_value_t = 30)]
    max_tech: u8,

    /// Number of worker threads, 0 for number of available CPUs
    #[arg(long, default_value_t = 0)]
    num_threads: usize,

    /// Master seed, 0 to derive one from system entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output path for the generated dataset
    #[arg(long, default_value = "dataset")]
    out: PathBuf,

    /// Output format: csv or json
    #[arg(long, default_value = "csv")]
    format: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = GeneratorConfig {
        dataset_size: args.dataset_size,
        smooth_size: args.smooth_size,
        max_ships: args.max_ships,
        max_tech: args.max_tech,
        num_threads: args.num_threads,
        seed: resolve_seed(args.seed),
    };
    config.validate()?;

    tracing::info!("Output path: {}", args.out.display());
    tracing::info!(
        "Dataset: {} matchups, {} battles each",
        config.dataset_size,
        config.smooth_size
    );
    tracing::info!(
        "Limits: max {} ships per group, max tech {}",
        config.max_ships,
        config.max_tech
    );
    tracing::info!(
        "Workers: {}, seed: {}",
        config.num_threads,
        config.seed
    );

    let progress = AtomicU32::new(0);
    let done = AtomicBool::new(false);
    let records = std::thread::scope(|scope| {
        scope.spawn(|| report_progress(&progress, &done, config.dataset_size));
        let result = generator::generate_with_progress(&config, &progress);
        done.store(true, Ordering::Relaxed);
        result
    })?;

    write_records(&args, &records)?;
    tracing::info!("Wrote {} matchups to {}", records.len(), args.out.display());
    Ok(())
}

/// Overwrite the progress line until generation finishes.
fn report_progress(progress: &AtomicU32, done: &AtomicBool, total: u32) {
    loop {
        let p = progress.load(Ordering::Relaxed);
        print!(
            "\rProgress: {}/{} {:.2}%   ",
            p,
            total,
            100.0 * p as f64 / total as f64
        );
        io::stdout().flush().ok();

        if done.load(Ordering::Relaxed) {
            println!();
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
}

fn write_records(args: &Args, records: &[MatchupRecord]) -> Result<()> {
    let mut out = BufWriter::new(File::create(&args.out)?);
    match args.format.as_str() {
        "csv" => writer::write_csv(&mut out, records)?,
        "json" => writer::write_json(&mut out, records)?,
        other => {
            tracing::warn!("Unknown format '{}', defaulting to csv", other);
            writer::write_csv(&mut out, records)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// A zero seed means "pick one"; the replacement is re-rolled so a logged
/// seed of zero can never be mistaken for the sentinel.
fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    loop {
        let seed: u64 = rand::random();
        if seed != 0 {
            return seed;
        }
    }
}
