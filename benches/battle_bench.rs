//! Battle engine hot-loop benchmark

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use fleet_crucible::battle::{simulate, Roster, TechLevels, UnitKind};

fn mixed_fleets() -> (Vec<Roster>, Vec<Roster>) {
    let mut attacker = Roster::new(TechLevels::new(10, 10, 10));
    attacker.set_count(UnitKind::HeavyFighter, 200);
    attacker.set_count(UnitKind::Cruiser, 50);
    attacker.set_count(UnitKind::Battleship, 20);

    let mut defender = Roster::new(TechLevels::new(10, 10, 10));
    defender.set_count(UnitKind::LightFighter, 150);
    defender.set_count(UnitKind::Battleship, 40);
    defender.set_count(UnitKind::RocketLauncher, 80);

    (vec![attacker], vec![defender])
}

fn bench_simulate(c: &mut Criterion) {
    let (attackers, defenders) = mixed_fleets();

    c.bench_function("simulate_mixed_fleets", |b| {
        b.iter_batched(
            || (attackers.clone(), defenders.clone()),
            |(mut a, mut d)| simulate(&mut a, &mut d, 48_271),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
