//! Round-based battle resolution
//!
//! The exchange-of-fire arithmetic is deliberately exact: expressions and
//! operand order are fixed so that a given seed always reproduces the same
//! battle, bit for bit, across platforms. Resist the urge to refactor the
//! floating-point math.

use crate::battle::constants::{HULL_BREAK_THRESHOLD, MAX_ROUNDS};
use crate::battle::party::{max_hull, max_shield, Party, Roster};
use crate::battle::rng;

/// Resolve one side's volley against the other.
///
/// Every unit in the attacker's alive prefix fires, in array order - including
/// units destroyed earlier this round, which still return fire (volleys within
/// a round are simultaneous). Each shot picks a uniform target over the
/// defender's round-start alive prefix; targets destroyed mid-round absorb
/// wasted shots. After each shot the shooter may re-engage a freshly drawn
/// target with probability `(n-1)/n`, where `n` is the rapid-fire denominator
/// for the target kind it just hit.
///
/// Returns the advanced rng state.
fn fire(attackers: &Party, defenders: &mut Party, mut state: u32) -> u32 {
    let num_targets = defenders.num_alive;
    debug_assert!(num_targets > 0);

    for shooter in &attackers.units[..attackers.num_alive] {
        let attrs = shooter.kind.attrs();
        let techs = &attackers.rosters[shooter.owner as usize].techs;
        let damage = attrs.weapons * techs.weapons_scale();

        loop {
            state = rng::next(state);
            let target = &mut defenders.units[state as usize % num_targets];

            if target.hull != 0.0 {
                let defender_techs = &defenders.rosters[target.owner as usize].techs;
                let mut hull = target.hull;
                let hull_overflow = damage - target.shield;

                if hull_overflow < 0.0 {
                    // Absorbed. Damage rounds down to whole percents of the
                    // kind's full shield capacity before subtraction; tiny
                    // shots can round to nothing. Intentional, keep as is.
                    let capacity = max_shield(target.kind, defender_techs);
                    let shield_damage = 0.01 * (100.0 * damage / capacity).floor() * capacity;
                    target.shield -= shield_damage;
                } else {
                    target.shield = 0.0;
                    let hull_damage = if hull_overflow > hull {
                        hull
                    } else {
                        hull_overflow
                    };
                    hull -= hull_damage;
                }

                // A damaged unit below the break threshold may blow up
                // outright, with probability equal to its missing-hull
                // fraction. Prevents asymptotic never-quite-dead stalemates.
                if hull != 0.0 {
                    let capacity = max_hull(target.kind, defender_techs);
                    if hull < HULL_BREAK_THRESHOLD * capacity {
                        state = rng::next(state);
                        if hull < (1.0 / rng::RAND_MAX as f32) * state as f32 * capacity {
                            hull = 0.0;
                        }
                    }
                }
                target.hull = hull;
            }

            let extra = attrs.rapid_fire[target.kind as usize];
            if extra == 0 {
                break;
            }
            state = rng::next(state);
            if state % extra == 0 {
                break;
            }
        }
    }

    state
}

/// Fight a battle between two sides and write the survivors back.
///
/// Each side is a non-empty slice of combatant rosters; counts are replaced
/// in place with the surviving composition. Returns the number of rounds
/// fought, in `[0, MAX_ROUNDS]` - zero when a side starts with no units.
///
/// The seed fully determines the outcome. Zero is the generator's fixed
/// point and is a contract violation, as is an empty side.
pub fn simulate(attackers: &mut [Roster], defenders: &mut [Roster], seed: u32) -> u32 {
    assert!(seed != 0, "battle seed must be non-zero");
    assert!(
        !attackers.is_empty() && !defenders.is_empty(),
        "each side needs at least one combatant"
    );

    let mut attack = Party::muster(attackers);
    let mut defense = Party::muster(defenders);

    let mut state = seed;
    let mut round = 0;

    while round < MAX_ROUNDS && attack.num_alive > 0 && defense.num_alive > 0 {
        attack.restore_shields();
        defense.restore_shields();

        state = fire(&attack, &mut defense, state);
        state = fire(&defense, &mut attack, state);

        attack.compact();
        defense.compact();

        round += 1;
    }

    attack.reaggregate();
    defense.reaggregate();

    round
}
