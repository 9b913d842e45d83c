// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use grove_scene::{Category, FlatPairs, GridPairs, Kind, Node, Scene};
use kurbo::{Rect, Vec2};

#[derive(Debug)]
enum Body {
    Layer,
    Box(f64),
}

impl Kind for Body {
    fn category(&self) -> Category {
        match self {
            Self::Layer => Category::NONE,
            Self::Box(_) => Category::ENEMY_NPC,
        }
    }

    fn local_bounds(&self) -> Option<Rect> {
        match self {
            Self::Layer => None,
            Self::Box(size) => Some(Rect::new(0.0, 0.0, *size, *size)),
        }
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

/// `n` boxes of size 24 scattered over a square sized for roughly constant density.
fn scatter(n: usize) -> Scene<Body> {
    let mut scene = Scene::new(Body::Layer);
    let layer = scene.attach(scene.root(), Node::new(Body::Layer));
    let side = (n as f64).sqrt() * 64.0;
    let mut rng = Rng(0x9e37_79b9_7f4a_7c15);
    for _ in 0..n {
        let at = Vec2::new(rng.next_f64() * side, rng.next_f64() * side);
        scene.attach(layer, Node::new(Body::Box(24.0)).at(at));
    }
    scene
}

fn bench_detect_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_collisions");
    for n in [64_usize, 256, 1024, 4096] {
        let scene = scatter(n);
        group.throughput(Throughput::Elements(n as u64));
        if n <= 1024 {
            group.bench_function(BenchmarkId::new("FlatPairs", n), |b| {
                let mut flat = FlatPairs::new();
                b.iter(|| black_box(scene.detect_collisions_with(&mut flat)).len());
            });
        }
        for cell in [32.0, 64.0, 128.0] {
            group.bench_function(BenchmarkId::new(format!("Grid({cell})"), n), |b| {
                let mut grid = GridPairs::new(cell);
                b.iter(|| black_box(scene.detect_collisions_with(&mut grid)).len());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_detect_collisions);
criterion_main!(benches);
