//! Benchmarks for the carom tick loop.

use carom::{colors, Body, NoOpTickObserver, SceneConfig, Vec2};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_three_body_scene(c: &mut Criterion) {
    c.bench_function("three_bodies_1000_ticks", |b| {
        b.iter(|| {
            let mut arena = SceneConfig::new(800.0f32, 600.0)
                .with_body(Body::new(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 20.0, colors::RED))
                .with_body(Body::new(2, Vec2::new(200.0, 200.0), Vec2::new(-1.0, -1.0), 30.0, colors::BLUE))
                .with_body(Body::new(3, Vec2::new(300.0, 300.0), Vec2::new(-1.0, -1.0), 40.0, colors::BLACK))
                .build()
                .unwrap();
            for _ in 0..1000 {
                arena.step(&mut NoOpTickObserver);
            }
            arena.bodies()[0].pos
        });
    });
}

fn bench_crowded_scene(c: &mut Criterion) {
    // 64 bodies: the O(n^2) pair pass dominates here.
    c.bench_function("crowded_64_bodies_60_ticks", |b| {
        b.iter(|| {
            let mut config = SceneConfig::new(800.0f32, 600.0);
            for i in 0..64u32 {
                let x = 50.0 + (i % 8) as f32 * 90.0;
                let y = 50.0 + (i / 8) as f32 * 70.0;
                let vx = if i % 2 == 0 { 1.0 } else { -1.0 };
                let vy = if i % 3 == 0 { 1.0 } else { -1.0 };
                config = config.with_body(Body::new(i, Vec2::new(x, y), Vec2::new(vx, vy), 12.0, colors::GRAY));
            }
            let mut arena = config.build().unwrap();
            for _ in 0..60 {
                arena.step(&mut NoOpTickObserver);
            }
            arena.bodies().len()
        });
    });
}

criterion_group!(benches, bench_three_body_scene, bench_crowded_scene);
criterion_main!(benches);
