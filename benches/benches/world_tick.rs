// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use grove_entities::data::CreatureType;
use grove_entities::{Action, Player, World, WorldConfig};
use kurbo::Vec2;

fn crowded(n: usize) -> WorldConfig {
    let npcs = (0..n)
        .map(|i| {
            let ty = if i % 4 == 0 { CreatureType::Bear } else { CreatureType::Bunny };
            let x = (i % 16) as f64 * 40.0 - 320.0;
            let y = -((i / 16) as f64) * 40.0 - 120.0;
            (ty, Vec2::new(x, y))
        })
        .collect();
    WorldConfig {
        npcs,
        ..WorldConfig::default()
    }
}

fn bench_world_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_tick");
    let dt = Duration::from_millis(16);
    for n in [16_usize, 128, 512] {
        group.bench_function(BenchmarkId::new("60 ticks", n), |b| {
            let player = Player::default();
            b.iter_batched(
                || World::new(crowded(n)),
                |mut world| {
                    for _ in 0..60 {
                        player.handle_realtime_input(
                            [Action::MoveLeft, Action::MagicAttack],
                            world.commands_mut(),
                        );
                        world.update(dt);
                    }
                    world
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_world_tick);
criterion_main!(benches);
