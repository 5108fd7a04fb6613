//! Dataset serialization
//!
//! The CSV layout is column-positional with no header: attacker techs,
//! defender techs, then six blocks of ship counts (initial, mean survivors,
//! standard deviation; attacker then defender within each pair). Training
//! pipelines index columns, so the ship block width is part of the format.

use std::io::{self, Write};

use crate::battle::party::TechLevels;
use crate::battle::units::{NUM_KINDS, NUM_SHIP_KINDS};
use crate::core::error::Result;
use crate::dataset::generator::MatchupRecord;
use crate::dataset::stats::KindVector;

/// Columns per CSV row: two tech triples plus six ship-count blocks.
pub const CSV_COLUMNS: usize = 6 + 6 * NUM_SHIP_KINDS;

/// Write records as CSV rows.
pub fn write_csv<W: Write>(mut out: W, records: &[MatchupRecord]) -> Result<()> {
    for record in records {
        write_techs(&mut out, &record.attacker.techs)?;
        out.write_all(b",")?;
        write_techs(&mut out, &record.defender.techs)?;
        out.write_all(b",")?;
        write_counts(&mut out, &record.attacker.counts)?;
        out.write_all(b",")?;
        write_counts(&mut out, &record.defender.counts)?;
        out.write_all(b",")?;
        write_vector(&mut out, &record.attacker_mean)?;
        out.write_all(b",")?;
        write_vector(&mut out, &record.defender_mean)?;
        out.write_all(b",")?;
        write_vector(&mut out, &record.attacker_sd)?;
        out.write_all(b",")?;
        write_vector(&mut out, &record.defender_sd)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: W, records: &[MatchupRecord]) -> Result<()> {
    serde_json::to_writer_pretty(out, records)?;
    Ok(())
}

fn write_techs<W: Write>(out: &mut W, techs: &TechLevels) -> io::Result<()> {
    write!(out, "{},{},{}", techs.weapons, techs.shielding, techs.armor)
}

fn write_counts<W: Write>(out: &mut W, counts: &[u32; NUM_KINDS]) -> io::Result<()> {
    for (kind, count) in counts.iter().enumerate().take(NUM_SHIP_KINDS) {
        if kind > 0 {
            out.write_all(b",")?;
        }
        write!(out, "{count}")?;
    }
    Ok(())
}

fn write_vector<W: Write>(out: &mut W, vector: &KindVector) -> io::Result<()> {
    for (kind, value) in vector.0.iter().enumerate().take(NUM_SHIP_KINDS) {
        if kind > 0 {
            out.write_all(b",")?;
        }
        write!(out, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::party::Roster;
    use crate::battle::units::UnitKind;

    fn sample_record() -> MatchupRecord {
        let mut attacker = Roster::new(TechLevels::new(10, 10, 10));
        attacker.set_count(UnitKind::HeavyFighter, 50);
        let mut defender = Roster::new(TechLevels::new(8, 9, 10));
        defender.set_count(UnitKind::LightFighter, 30);

        let mut mean = [0.0; NUM_KINDS];
        mean[UnitKind::HeavyFighter as usize] = 42.5;
        MatchupRecord {
            attacker,
            defender,
            attacker_mean: KindVector(mean),
            defender_mean: KindVector::ZERO,
            attacker_sd: KindVector::ZERO,
            defender_sd: KindVector::ZERO,
        }
    }

    #[test]
    fn test_csv_row_has_fixed_width() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[sample_record()]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let row = text.lines().next().unwrap();
        assert_eq!(row.split(',').count(), CSV_COLUMNS);
    }

    #[test]
    fn test_csv_encodes_values_in_order() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[sample_record()]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let fields: Vec<&str> = text.trim_end().split(',').collect();
        assert_eq!(&fields[..6], &["10", "10", "10", "8", "9", "10"]);
        // Attacker initial counts start at column 6.
        assert_eq!(fields[6 + UnitKind::HeavyFighter as usize], "50");
        // Attacker means start after both initial-count blocks.
        assert_eq!(
            fields[6 + 2 * NUM_SHIP_KINDS + UnitKind::HeavyFighter as usize],
            "42.5"
        );
    }

    #[test]
    fn test_json_round_trips() {
        let records = vec![sample_record()];
        let mut buffer = Vec::new();
        write_json(&mut buffer, &records).unwrap();

        let parsed: Vec<MatchupRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, records);
    }
}
