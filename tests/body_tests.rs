use approx::assert_relative_eq;
use gravity_sandbox::*;

fn world_with_gravity(gravity: f64) -> World {
    let config = WorldConfig {
        gravity,
        ..WorldConfig::default()
    };
    World::try_with_seed(config, 11).expect("valid config")
}

#[test]
fn free_body_gains_exactly_gravity_per_tick() {
    let mut world = world_with_gravity(-0.2);
    let id = world
        .spawn_body_with(0.0, 100.0, BodyParams::new(DVec2::new(0.5, 2.0), 30.0))
        .unwrap();

    for _ in 0..5 {
        let before = world.body(id).expect("body exists").velocity;
        world.step();
        let after = world.body(id).expect("body exists").velocity;
        assert_eq!(after.y, before.y + world.gravity());
        assert_eq!(after.x, before.x);
    }
}

#[test]
fn falling_body_bounces_and_settles() {
    let mut world = world_with_gravity(-0.2);
    let id = world
        .spawn_body_with(0.0, 0.0, BodyParams::new(DVec2::new(0.0, -10.0), 20.0))
        .unwrap();

    let mut bounced = false;
    for _ in 0..100 {
        let before = *world.body(id).expect("body exists");
        world.step();
        let after = *world.body(id).expect("body exists");
        if after.position.y <= -240.0 {
            assert_eq!(after.position.y, -240.0);
            let incoming = before.velocity.y + world.gravity();
            assert!(incoming < 0.0);
            assert_relative_eq!(after.velocity.y, -incoming * 0.8, epsilon = 1e-9);
            bounced = true;
            break;
        }
    }
    assert!(bounced, "body never reached the ground");

    for _ in 0..2000 {
        world.step();
    }
    let rested = world.body(id).expect("body exists");
    assert_eq!(rested.position.y, -240.0);
    assert!(rested.velocity.y.abs() < 1.0);
}

#[test]
fn body_dropped_at_minus_ten_bounces_to_eight() {
    let mut world = world_with_gravity(0.0);
    let id = world
        .spawn_body_with(0.0, -231.0, BodyParams::new(DVec2::new(0.0, -10.0), 20.0))
        .unwrap();
    world.step();
    let body = world.body(id).expect("body exists");
    assert_eq!(body.position.y, -240.0);
    assert_relative_eq!(body.velocity.y, 8.0, epsilon = 1e-12);
}

#[test]
fn walls_reflect_horizontal_velocity() {
    let mut world = world_with_gravity(0.0);
    let left = world
        .spawn_body_with(-365.0, 0.0, BodyParams::new(DVec2::new(-6.0, 0.0), 20.0))
        .unwrap();
    let right = world
        .spawn_body_with(365.0, 100.0, BodyParams::new(DVec2::new(6.0, 0.0), 20.0))
        .unwrap();
    world.step();

    let left = world.body(left).expect("left body");
    assert_eq!(left.position.x, -370.0);
    assert_relative_eq!(left.velocity.x, 4.8, epsilon = 1e-12);

    let right = world.body(right).expect("right body");
    assert_eq!(right.position.x, 370.0);
    assert_relative_eq!(right.velocity.x, -4.8, epsilon = 1e-12);
}

#[test]
fn well_in_range_bends_trajectory() {
    let mut world = world_with_gravity(0.0);
    world.spawn_well_with(100.0, 0.0, 0.5);
    let id = world
        .spawn_body_with(0.0, 0.0, BodyParams::new(DVec2::ZERO, 20.0))
        .unwrap();
    world.step();
    let body = world.body(id).expect("body exists");
    assert_relative_eq!(body.velocity.x, 0.25, epsilon = 1e-12);
    assert_relative_eq!(body.position.x, 0.25, epsilon = 1e-12);
}

#[test]
fn drag_freezes_body_until_release() {
    let mut world = world_with_gravity(-0.5);
    world.spawn_well_with(30.0, 30.0, 2.0);
    let id = world
        .spawn_body_with(0.0, 0.0, BodyParams::new(DVec2::new(4.0, 4.0), 20.0))
        .unwrap();

    assert!(world.begin_drag(id, 3.0, -2.0));
    for step in 0..10 {
        assert!(world.update_drag(id, 3.0 + step as f64, -2.0));
        world.step();
        let body = world.body(id).expect("body exists");
        assert_eq!(body.velocity, DVec2::ZERO);
        assert_eq!(body.position, DVec2::new(step as f64, 0.0));
    }

    assert!(world.end_drag(id));
    assert_eq!(world.body(id).expect("body exists").velocity, DVec2::ZERO);
    world.step();
    assert_ne!(world.body(id).expect("body exists").velocity, DVec2::ZERO);
}

#[test]
fn drag_commands_on_unknown_ids_are_noops() {
    let mut world = World::with_seed(0);
    let ghost = EntityId::new(42);
    assert!(!world.begin_drag(ghost, 0.0, 0.0));
    assert!(!world.update_drag(ghost, 0.0, 0.0));
    assert!(!world.end_drag(ghost));
}
