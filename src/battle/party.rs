//! Rosters and battle-local parties
//!
//! A `Roster` is the aggregate, caller-visible composition of one combatant:
//! tech levels plus per-kind unit counts. For the duration of a battle each
//! side is expanded into a `Party` - a flat vector of individual units with
//! an alive prefix that shrinks as rounds compact casualties out. Only the
//! final re-aggregation writes back into the rosters.

use serde::{Deserialize, Serialize};

use crate::battle::constants::{
    HULL_PER_ARMOR_POINT, MAX_COMBATANTS_PER_SIDE, TECH_SCALE_STEP,
};
use crate::battle::units::{UnitKind, NUM_KINDS};

/// Per-combatant technology levels.
///
/// Each level is a linear multiplier `1 + 0.1 * level` on the corresponding
/// base stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechLevels {
    pub weapons: u8,
    pub shielding: u8,
    pub armor: u8,
}

impl TechLevels {
    pub fn new(weapons: u8, shielding: u8, armor: u8) -> Self {
        Self {
            weapons,
            shielding,
            armor,
        }
    }

    pub fn weapons_scale(&self) -> f32 {
        1.0 + TECH_SCALE_STEP * self.weapons as f32
    }

    pub fn shielding_scale(&self) -> f32 {
        1.0 + TECH_SCALE_STEP * self.shielding as f32
    }

    pub fn armor_scale(&self) -> f32 {
        1.0 + TECH_SCALE_STEP * self.armor as f32
    }
}

/// Aggregate composition of one combatant: tech levels + per-kind counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub techs: TechLevels,
    pub counts: [u32; NUM_KINDS],
}

impl Roster {
    pub fn new(techs: TechLevels) -> Self {
        Self {
            techs,
            counts: [0; NUM_KINDS],
        }
    }

    pub fn count(&self, kind: UnitKind) -> u32 {
        self.counts[kind as usize]
    }

    pub fn set_count(&mut self, kind: UnitKind, count: u32) {
        self.counts[kind as usize] = count;
    }

    /// Total units across all kinds.
    pub fn total_units(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }
}

/// Tech-scaled maximum hull capacity for a kind.
pub fn max_hull(kind: UnitKind, techs: &TechLevels) -> f32 {
    HULL_PER_ARMOR_POINT * kind.attrs().armor * techs.armor_scale()
}

/// Tech-scaled maximum shield capacity for a kind.
pub fn max_shield(kind: UnitKind, techs: &TechLevels) -> f32 {
    kind.attrs().shield * techs.shielding_scale()
}

/// One unit for the duration of a battle. `hull == 0` means destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatUnit {
    pub shield: f32,
    pub hull: f32,
    pub kind: UnitKind,
    /// Side-local combatant index, for tech lookups and re-aggregation.
    pub owner: u8,
}

/// One side's expanded working set for a single battle.
///
/// `units[..num_alive]` is the alive prefix. Units destroyed mid-round stay
/// in the prefix (absorbing wasted shots) until `compact` runs between
/// rounds; the suffix beyond `num_alive` is dead and never touched again.
#[derive(Debug)]
pub struct Party<'a> {
    pub rosters: &'a mut [Roster],
    pub units: Vec<CombatUnit>,
    pub num_alive: usize,
}

impl<'a> Party<'a> {
    /// Expand aggregate rosters into individual units.
    ///
    /// Emission order is combatant-ascending, then kind-ascending, then one
    /// record per count. Units start with full hull and no shield; shields
    /// are restored at the top of every round.
    pub fn muster(rosters: &'a mut [Roster]) -> Self {
        assert!(
            rosters.len() <= MAX_COMBATANTS_PER_SIDE,
            "at most {MAX_COMBATANTS_PER_SIDE} combatants per side"
        );

        let total: usize = rosters
            .iter()
            .map(|r| r.counts.iter().map(|&c| c as usize).sum::<usize>())
            .sum();

        let mut units = Vec::with_capacity(total);
        for (owner, roster) in rosters.iter().enumerate() {
            for kind in UnitKind::ALL {
                let hull = max_hull(kind, &roster.techs);
                for _ in 0..roster.counts[kind as usize] {
                    units.push(CombatUnit {
                        shield: 0.0,
                        hull,
                        kind,
                        owner: owner as u8,
                    });
                }
            }
        }

        let num_alive = units.len();
        Self {
            rosters,
            units,
            num_alive,
        }
    }

    /// Overwrite every alive unit's shield with its full tech-scaled
    /// capacity. Shield damage does not carry across rounds; hull damage
    /// does.
    pub fn restore_shields(&mut self) {
        for unit in &mut self.units[..self.num_alive] {
            let techs = &self.rosters[unit.owner as usize].techs;
            unit.shield = max_shield(unit.kind, techs);
        }
    }

    /// Remove destroyed units from the alive prefix.
    ///
    /// Stable in-place partition: survivors keep their relative order, which
    /// the targeting modulo depends on for reproducibility.
    pub fn compact(&mut self) {
        let mut survivors = 0;
        for i in 0..self.num_alive {
            if self.units[i].hull != 0.0 {
                self.units[survivors] = self.units[i];
                survivors += 1;
            }
        }
        self.num_alive = survivors;
    }

    /// Write surviving unit counts back into the rosters.
    pub fn reaggregate(&mut self) {
        for roster in self.rosters.iter_mut() {
            roster.counts = [0; NUM_KINDS];
        }
        for unit in &self.units[..self.num_alive] {
            self.rosters[unit.owner as usize].counts[unit.kind as usize] += 1;
        }
    }
}
