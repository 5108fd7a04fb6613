//! Monte-Carlo matchup generation
//!
//! Matchups are random attacker/defender pairs; each is fought `smooth_size`
//! times with fresh battle seeds and summarized as per-kind mean/sd survivor
//! counts. The dataset is split into one contiguous chunk per worker, each
//! worker owning its own seeded rng stream and output slice, so a fixed
//! master seed and thread count reproduce the dataset exactly. The shared
//! progress counter is for reporting only - nothing synchronizes on it.

use std::sync::atomic::{AtomicU32, Ordering};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::battle::{simulate, Roster, TechLevels, UnitKind};
use crate::core::config::GeneratorConfig;
use crate::core::error::{CrucibleError, Result};
use crate::dataset::stats::{self, KindVector};

/// One dataset row: a matchup and its smoothed outcome statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub attacker: Roster,
    pub defender: Roster,
    pub attacker_mean: KindVector,
    pub defender_mean: KindVector,
    pub attacker_sd: KindVector,
    pub defender_sd: KindVector,
}

/// Generate a dataset without external progress reporting.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<MatchupRecord>> {
    let progress = AtomicU32::new(0);
    generate_with_progress(config, &progress)
}

/// Generate a dataset, bumping `progress` once per finished matchup.
pub fn generate_with_progress(
    config: &GeneratorConfig,
    progress: &AtomicU32,
) -> Result<Vec<MatchupRecord>> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build()
        .map_err(|e| CrucibleError::ThreadPool(e.to_string()))?;

    // One chunk per worker; the first chunk absorbs the remainder. Chunk
    // seeds are drawn up front so the split is a pure function of the
    // master seed and the worker count.
    let workers = pool.current_num_threads() as u32;
    let base = config.dataset_size / workers;
    let mut master = ChaCha8Rng::seed_from_u64(config.seed);
    let chunks: Vec<(u32, u64)> = (0..workers)
        .map(|i| {
            let size = if i == 0 {
                base + config.dataset_size % workers
            } else {
                base
            };
            (size, master.gen())
        })
        .collect();

    tracing::debug!(
        "Generating {} matchups across {} workers",
        config.dataset_size,
        workers
    );

    let results: Vec<Vec<MatchupRecord>> = pool.install(|| {
        chunks
            .par_iter()
            .map(|&(size, seed)| generate_chunk(size, seed, config, progress))
            .collect()
    });

    Ok(results.into_iter().flatten().collect())
}

fn generate_chunk(
    size: u32,
    seed: u64,
    config: &GeneratorConfig,
    progress: &AtomicU32,
) -> Vec<MatchupRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let smooth = config.smooth_size as usize;

    let mut records = Vec::with_capacity(size as usize);
    let mut attacker_samples = vec![KindVector::ZERO; smooth];
    let mut defender_samples = vec![KindVector::ZERO; smooth];
    let mut attackers = vec![Roster::default()];
    let mut defenders = vec![Roster::default()];

    for _ in 0..size {
        let attacker = random_roster(&mut rng, config);
        let defender = random_roster(&mut rng, config);

        for j in 0..smooth {
            attackers[0] = attacker.clone();
            defenders[0] = defender.clone();

            simulate(&mut attackers, &mut defenders, battle_seed(&mut rng));

            attacker_samples[j] = KindVector::from_counts(&attackers[0].counts);
            defender_samples[j] = KindVector::from_counts(&defenders[0].counts);
        }

        let attacker_mean = stats::mean(&attacker_samples);
        let defender_mean = stats::mean(&defender_samples);
        records.push(MatchupRecord {
            attacker_sd: stats::std_dev(&attacker_samples, attacker_mean),
            defender_sd: stats::std_dev(&defender_samples, defender_mean),
            attacker,
            defender,
            attacker_mean,
            defender_mean,
        });

        progress.fetch_add(1, Ordering::Relaxed);
    }

    records
}

/// Roll a random combatant: uniform tech levels, then a random number of
/// ship groups with uniform counts. Groups may land on the same kind twice;
/// the later roll wins.
fn random_roster(rng: &mut ChaCha8Rng, config: &GeneratorConfig) -> Roster {
    let techs = TechLevels::new(
        rng.gen_range(0..=config.max_tech),
        rng.gen_range(0..=config.max_tech),
        rng.gen_range(0..=config.max_tech),
    );

    let ships = UnitKind::ships();
    let mut roster = Roster::new(techs);
    let num_groups = rng.gen_range(0..ships.len());
    for _ in 0..num_groups {
        let kind = ships[rng.gen_range(0..ships.len())];
        roster.set_count(kind, rng.gen_range(0..=config.max_ships));
    }
    roster
}

/// Draw a battle seed, re-rolling the Lehmer fixed point.
fn battle_seed(rng: &mut ChaCha8Rng) -> u32 {
    loop {
        let seed: u32 = rng.gen();
        if seed != 0 {
            return seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::units::NUM_KINDS;

    fn tiny_config() -> GeneratorConfig {
        GeneratorConfig {
            dataset_size: 3,
            smooth_size: 4,
            max_ships: 25,
            max_tech: 10,
            num_threads: 1,
            seed: 42,
        }
    }

    #[test]
    fn test_generates_requested_matchup_count() {
        let records = generate(&tiny_config()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_fixed_seed_reproduces_the_dataset() {
        let config = tiny_config();
        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mean_survivors_bounded_by_initial_counts() {
        for record in generate(&tiny_config()).unwrap() {
            for kind in 0..NUM_KINDS {
                assert!(record.attacker_mean.0[kind] <= record.attacker.counts[kind] as f64);
                assert!(record.defender_mean.0[kind] <= record.defender.counts[kind] as f64);
            }
        }
    }

    #[test]
    fn test_rolled_rosters_are_ship_only() {
        for record in generate(&tiny_config()).unwrap() {
            for kind in UnitKind::ALL.iter().filter(|k| k.is_defense()) {
                assert_eq!(record.attacker.count(*kind), 0);
                assert_eq!(record.defender.count(*kind), 0);
            }
        }
    }

    #[test]
    fn test_progress_reaches_dataset_size() {
        let config = tiny_config();
        let progress = AtomicU32::new(0);
        let records = generate_with_progress(&config, &progress).unwrap();
        assert_eq!(progress.load(Ordering::Relaxed), config.dataset_size);
        assert_eq!(records.len() as u32, config.dataset_size);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GeneratorConfig {
            smooth_size: 1,
            ..tiny_config()
        };
        assert!(generate(&config).is_err());
    }
}
