//! Dataset generation integration tests

use fleet_crucible::core::config::GeneratorConfig;
use fleet_crucible::dataset::{generate, write_csv, write_json, MatchupRecord, CSV_COLUMNS};

fn test_config() -> GeneratorConfig {
    GeneratorConfig {
        dataset_size: 5,
        smooth_size: 3,
        max_ships: 40,
        max_tech: 12,
        num_threads: 1,
        seed: 20_240_817,
    }
}

#[test]
fn test_end_to_end_csv_output() {
    let records = generate(&test_config()).unwrap();
    assert_eq!(records.len(), 5);

    let mut buffer = Vec::new();
    write_csv(&mut buffer, &records).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert_eq!(row.split(',').count(), CSV_COLUMNS);
    }
}

#[test]
fn test_dataset_bytes_are_reproducible() {
    let config = test_config();

    let mut first = Vec::new();
    write_csv(&mut first, &generate(&config).unwrap()).unwrap();
    let mut second = Vec::new();
    write_csv(&mut second, &generate(&config).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_json_output_round_trips() {
    let records = generate(&test_config()).unwrap();

    let mut buffer = Vec::new();
    write_json(&mut buffer, &records).unwrap();
    let parsed: Vec<MatchupRecord> = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(parsed, records);
}

#[test]
fn test_standard_deviation_is_finite_and_nonnegative() {
    for record in generate(&test_config()).unwrap() {
        for kind in 0..fleet_crucible::battle::NUM_KINDS {
            assert!(record.attacker_sd.0[kind] >= 0.0);
            assert!(record.attacker_sd.0[kind].is_finite());
            assert!(record.defender_sd.0[kind] >= 0.0);
            assert!(record.defender_sd.0[kind].is_finite());
        }
    }
}
