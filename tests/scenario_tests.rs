use carom::collide::{resolve_pair, resolve_walls};
use carom::{colors, Body, NoOpTickObserver, SceneConfig, Vec2};

/// The reference scene: three bodies in an 800x600 arena.
fn reference_scene() -> carom::Arena<f64> {
    SceneConfig::new(800.0, 600.0)
        .with_body(Body::new(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 20.0, colors::RED))
        .with_body(Body::new(2, Vec2::new(200.0, 200.0), Vec2::new(-1.0, -1.0), 30.0, colors::BLUE))
        .with_body(Body::new(3, Vec2::new(300.0, 300.0), Vec2::new(-1.0, -1.0), 40.0, colors::BLACK))
        .build()
        .unwrap()
}

/// Re-run the resolution passes on a copy of the snapshot. The published
/// snapshot is post-integration; the containment and no-overlap properties
/// are defined on the post-resolution state, which this reconstructs.
fn resolved_copy(arena: &carom::Arena<f64>) -> Vec<Body<f64>> {
    let mut bodies = arena.bodies().to_vec();
    for b in bodies.iter_mut() {
        resolve_walls(b, arena.width(), arena.height(), &mut NoOpTickObserver);
    }
    let count = bodies.len();
    for i in 0..count {
        for j in (i + 1)..count {
            resolve_pair(&mut bodies, i, j, None, &mut NoOpTickObserver);
        }
    }
    bodies
}

#[test]
fn three_body_scene_stays_sane_for_1000_ticks() {
    let mut arena = reference_scene();

    // Elastic collisions conserve the radius-weighted kinetic energy, so no
    // body ever exceeds sqrt(sum(r * |v|^2) / r_min) = 3 units per tick.
    let max_speed = 3.0;

    for _ in 0..1000 {
        arena.step(&mut NoOpTickObserver);

        // Published positions may overshoot a wall within a tick: at most one
        // tick of velocity, plus half a pair separation for a collision
        // happening right at the wall. The next resolution pulls them back.
        let slack = 2.0 * max_speed + 1e-6;
        for b in arena.bodies() {
            assert!(b.pos.x.is_finite() && b.pos.y.is_finite());
            assert!(b.vel.x.is_finite() && b.vel.y.is_finite());
            assert!(b.pos.x >= b.radius - slack && b.pos.x <= 800.0 - b.radius + slack);
            assert!(b.pos.y >= b.radius - slack && b.pos.y <= 600.0 - b.radius + slack);
            assert!(b.vel.length() <= max_speed + 1e-6, "speed grew past the energy bound");
        }
    }

    let resolved = resolved_copy(&arena);
    for b in &resolved {
        assert!(
            b.pos.x >= b.radius && b.pos.x <= 800.0 - b.radius,
            "body {} x containment violated after resolution: {}",
            b.id,
            b.pos.x
        );
        assert!(
            b.pos.y >= b.radius && b.pos.y <= 600.0 - b.radius,
            "body {} y containment violated after resolution: {}",
            b.id,
            b.pos.y
        );
    }
    for i in 0..resolved.len() {
        for j in (i + 1)..resolved.len() {
            let dist = resolved[i].pos.distance(resolved[j].pos);
            let min = resolved[i].radius + resolved[j].radius;
            assert!(
                dist >= min - 1e-6,
                "bodies {} and {} overlap after resolution: {} < {}",
                resolved[i].id,
                resolved[j].id,
                dist,
                min
            );
        }
    }
}

#[test]
fn tick_counter_advances() {
    let mut arena = reference_scene();
    assert_eq!(arena.tick(), 0);
    for _ in 0..10 {
        arena.step(&mut NoOpTickObserver);
    }
    assert_eq!(arena.tick(), 10);
}

#[test]
fn scene_rejects_bad_configuration() {
    use carom::SceneError;

    let err = SceneConfig::new(800.0f64, 600.0)
        .with_body(Body::new(1, Vec2::new(100.0, 100.0), Vec2::zero(), 0.0, colors::RED))
        .build()
        .unwrap_err();
    assert_eq!(err, SceneError::InvalidRadius { id: 1 });

    let err = SceneConfig::new(800.0f64, 600.0)
        .with_body(Body::new(7, Vec2::new(100.0, 100.0), Vec2::zero(), 10.0, colors::RED))
        .with_body(Body::new(7, Vec2::new(200.0, 200.0), Vec2::zero(), 10.0, colors::BLUE))
        .build()
        .unwrap_err();
    assert_eq!(err, SceneError::DuplicateId { id: 7 });

    let err = SceneConfig::<f64>::new(-800.0, 600.0).build().unwrap_err();
    assert_eq!(err, SceneError::InvalidDimensions);

    let err = SceneConfig::<f64>::new(f64::INFINITY, 600.0).build().unwrap_err();
    assert_eq!(err, SceneError::InvalidDimensions);

    let err = SceneConfig::new(800.0f64, 600.0)
        .with_body(Body::new(1, Vec2::new(100.0, 100.0), Vec2::zero(), f64::NAN, colors::RED))
        .build()
        .unwrap_err();
    assert_eq!(err, SceneError::InvalidRadius { id: 1 });
}
