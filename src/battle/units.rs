//! Unit catalogue: kinds and their static combat attributes
//!
//! `UnitKind` ordering is significant - it indexes the attribute table and
//! every rapid-fire row. Ships come first (dataset rows cover ships only),
//! stationary defenses after.

use serde::{Deserialize, Serialize};

/// Number of unit kinds in the catalogue.
pub const NUM_KINDS: usize = 22;

/// Number of ship kinds (the leading prefix of the catalogue).
pub const NUM_SHIP_KINDS: usize = 14;

/// Ship and defense classes, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum UnitKind {
    SmallCargo,
    LargeCargo,
    LightFighter,
    HeavyFighter,
    Cruiser,
    Battleship,
    ColonyShip,
    Recycler,
    EspionageProbe,
    Bomber,
    SolarSatellite,
    Destroyer,
    DeathStar,
    Battlecruiser,
    RocketLauncher,
    LightLaser,
    HeavyLaser,
    GaussCannon,
    IonCannon,
    PlasmaTurret,
    SmallShieldDome,
    LargeShieldDome,
}

impl UnitKind {
    /// Every kind, in catalogue order.
    pub const ALL: [UnitKind; NUM_KINDS] = [
        UnitKind::SmallCargo,
        UnitKind::LargeCargo,
        UnitKind::LightFighter,
        UnitKind::HeavyFighter,
        UnitKind::Cruiser,
        UnitKind::Battleship,
        UnitKind::ColonyShip,
        UnitKind::Recycler,
        UnitKind::EspionageProbe,
        UnitKind::Bomber,
        UnitKind::SolarSatellite,
        UnitKind::Destroyer,
        UnitKind::DeathStar,
        UnitKind::Battlecruiser,
        UnitKind::RocketLauncher,
        UnitKind::LightLaser,
        UnitKind::HeavyLaser,
        UnitKind::GaussCannon,
        UnitKind::IonCannon,
        UnitKind::PlasmaTurret,
        UnitKind::SmallShieldDome,
        UnitKind::LargeShieldDome,
    ];

    /// The ship kinds (the prefix the matchup generator draws from).
    pub fn ships() -> &'static [UnitKind] {
        &Self::ALL[..NUM_SHIP_KINDS]
    }

    /// Static combat attributes for this kind.
    pub fn attrs(self) -> &'static UnitAttrs {
        &UNIT_ATTRS[self as usize]
    }

    /// Is this a stationary defense?
    pub fn is_defense(self) -> bool {
        self as usize >= NUM_SHIP_KINDS
    }
}

/// Static per-kind combat attributes.
///
/// `rapid_fire[target]` is the denominator of the chance to re-engage after
/// hitting that target kind; 0 means the shooter never re-engages against it.
#[derive(Debug, Clone)]
pub struct UnitAttrs {
    pub weapons: f32,
    pub shield: f32,
    pub armor: f32,
    pub rapid_fire: [u32; NUM_KINDS],
}

/// Build a dense rapid-fire row from its sparse (target, denominator) pairs.
const fn rapid_fire(pairs: &[(UnitKind, u32)]) -> [u32; NUM_KINDS] {
    let mut row = [0u32; NUM_KINDS];
    let mut i = 0;
    while i < pairs.len() {
        row[pairs[i].0 as usize] = pairs[i].1;
        i += 1;
    }
    row
}

const NO_RAPID_FIRE: [u32; NUM_KINDS] = [0; NUM_KINDS];

/// The catalogue, indexed by `UnitKind` ordinal.
pub static UNIT_ATTRS: [UnitAttrs; NUM_KINDS] = [
    // SmallCargo
    UnitAttrs {
        weapons: 5.0,
        shield: 10.0,
        armor: 4_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // LargeCargo
    UnitAttrs {
        weapons: 5.0,
        shield: 25.0,
        armor: 12_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // LightFighter
    UnitAttrs {
        weapons: 50.0,
        shield: 10.0,
        armor: 4_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // HeavyFighter
    UnitAttrs {
        weapons: 150.0,
        shield: 25.0,
        armor: 10_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::SmallCargo, 3),
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // Cruiser
    UnitAttrs {
        weapons: 400.0,
        shield: 50.0,
        armor: 27_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::LightFighter, 6),
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
            (UnitKind::RocketLauncher, 10),
        ]),
    },
    // Battleship
    UnitAttrs {
        weapons: 1_000.0,
        shield: 200.0,
        armor: 60_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // ColonyShip
    UnitAttrs {
        weapons: 50.0,
        shield: 100.0,
        armor: 30_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // Recycler
    UnitAttrs {
        weapons: 1.0,
        shield: 10.0,
        armor: 16_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // EspionageProbe
    UnitAttrs {
        weapons: 0.01,
        shield: 0.01,
        armor: 1_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // Bomber
    UnitAttrs {
        weapons: 1_000.0,
        shield: 500.0,
        armor: 75_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
            (UnitKind::RocketLauncher, 20),
            (UnitKind::LightLaser, 20),
            (UnitKind::HeavyLaser, 10),
            (UnitKind::GaussCannon, 5),
            (UnitKind::IonCannon, 10),
            (UnitKind::PlasmaTurret, 5),
        ]),
    },
    // SolarSatellite
    UnitAttrs {
        weapons: 1.0,
        shield: 1.0,
        armor: 2_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // Destroyer
    UnitAttrs {
        weapons: 2_000.0,
        shield: 500.0,
        armor: 110_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
            (UnitKind::Battlecruiser, 2),
            (UnitKind::LightLaser, 10),
        ]),
    },
    // DeathStar
    UnitAttrs {
        weapons: 200_000.0,
        shield: 50_000.0,
        armor: 9_000_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::SmallCargo, 250),
            (UnitKind::LargeCargo, 250),
            (UnitKind::LightFighter, 200),
            (UnitKind::HeavyFighter, 100),
            (UnitKind::Cruiser, 33),
            (UnitKind::Battleship, 30),
            (UnitKind::ColonyShip, 250),
            (UnitKind::Recycler, 250),
            (UnitKind::EspionageProbe, 1_250),
            (UnitKind::Bomber, 25),
            (UnitKind::SolarSatellite, 1_250),
            (UnitKind::Destroyer, 5),
            (UnitKind::Battlecruiser, 15),
            (UnitKind::RocketLauncher, 200),
            (UnitKind::LightLaser, 200),
            (UnitKind::HeavyLaser, 100),
            (UnitKind::GaussCannon, 50),
            (UnitKind::IonCannon, 100),
        ]),
    },
    // Battlecruiser
    UnitAttrs {
        weapons: 700.0,
        shield: 400.0,
        armor: 70_000.0,
        rapid_fire: rapid_fire(&[
            (UnitKind::SmallCargo, 3),
            (UnitKind::LargeCargo, 3),
            (UnitKind::HeavyFighter, 4),
            (UnitKind::Cruiser, 4),
            (UnitKind::Battleship, 7),
            (UnitKind::EspionageProbe, 5),
            (UnitKind::SolarSatellite, 5),
        ]),
    },
    // RocketLauncher
    UnitAttrs {
        weapons: 80.0,
        shield: 20.0,
        armor: 2_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // LightLaser
    UnitAttrs {
        weapons: 100.0,
        shield: 25.0,
        armor: 2_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // HeavyLaser
    UnitAttrs {
        weapons: 250.0,
        shield: 100.0,
        armor: 8_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // GaussCannon
    UnitAttrs {
        weapons: 1_100.0,
        shield: 200.0,
        armor: 35_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // IonCannon
    UnitAttrs {
        weapons: 150.0,
        shield: 500.0,
        armor: 8_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // PlasmaTurret
    UnitAttrs {
        weapons: 3_000.0,
        shield: 300.0,
        armor: 100_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // SmallShieldDome
    UnitAttrs {
        weapons: 1.0,
        shield: 2_000.0,
        armor: 20_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
    // LargeShieldDome
    UnitAttrs {
        weapons: 1.0,
        shield: 10_000.0,
        armor: 100_000.0,
        rapid_fire: NO_RAPID_FIRE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_matches_enum_order() {
        assert_eq!(UnitKind::ALL.len(), NUM_KINDS);
        assert_eq!(UnitKind::LightFighter.attrs().weapons, 50.0);
        assert_eq!(UnitKind::Battleship.attrs().shield, 200.0);
        assert_eq!(UnitKind::DeathStar.attrs().armor, 9_000_000.0);
        assert_eq!(UnitKind::PlasmaTurret.attrs().weapons, 3_000.0);
    }

    #[test]
    fn test_ship_prefix_ends_at_battlecruiser() {
        assert_eq!(UnitKind::Battlecruiser as usize + 1, NUM_SHIP_KINDS);
        assert!(!UnitKind::Battlecruiser.is_defense());
        assert!(UnitKind::RocketLauncher.is_defense());
        assert_eq!(UnitKind::ships().len(), NUM_SHIP_KINDS);
    }

    #[test]
    fn test_rapid_fire_rows_are_sparse() {
        let cruiser = UnitKind::Cruiser.attrs();
        assert_eq!(cruiser.rapid_fire[UnitKind::LightFighter as usize], 6);
        assert_eq!(cruiser.rapid_fire[UnitKind::RocketLauncher as usize], 10);
        assert_eq!(cruiser.rapid_fire[UnitKind::Battleship as usize], 0);

        let death_star = UnitKind::DeathStar.attrs();
        assert_eq!(death_star.rapid_fire[UnitKind::EspionageProbe as usize], 1_250);
        assert_eq!(death_star.rapid_fire[UnitKind::PlasmaTurret as usize], 0);
    }

    #[test]
    fn test_probes_and_satellites_never_reengage() {
        assert_eq!(UnitKind::EspionageProbe.attrs().rapid_fire, NO_RAPID_FIRE);
        assert_eq!(UnitKind::SolarSatellite.attrs().rapid_fire, NO_RAPID_FIRE);
    }

    #[test]
    fn test_every_kind_has_positive_armor() {
        // A zero-armor kind would muster units already destroyed.
        for kind in UnitKind::ALL {
            assert!(kind.attrs().armor > 0.0, "{kind:?}");
            assert!(kind.attrs().shield > 0.0, "{kind:?}");
        }
    }
}
