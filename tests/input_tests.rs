use gravity_sandbox::*;

#[test]
fn press_drag_release_moves_a_body() {
    let mut world = World::with_seed(0);
    let id = world
        .spawn_body_with(0.0, 0.0, BodyParams::new(DVec2::new(1.0, 1.0), 30.0))
        .unwrap();
    let mut mapper = InputMapper::new();

    let events = [
        InputEvent::Press { x: 5.0, y: 5.0 },
        InputEvent::Drag { x: 105.0, y: 55.0 },
        InputEvent::Release { x: 105.0, y: 55.0 },
    ];
    for event in events {
        if let Some(command) = mapper.map(event, &world) {
            command.apply(&mut world);
        }
    }

    let body = world.body(id).expect("body");
    assert_eq!(body.position, DVec2::new(100.0, 50.0));
    assert_eq!(body.velocity, DVec2::ZERO);
    assert!(!body.is_dragged);
    assert_eq!(mapper.held(), None);
}

#[test]
fn clicks_remove_wells_or_spawn_bodies() {
    let mut world = World::with_seed(0);
    world.spawn_well_at(0.0, 0.0);
    let mut mapper = InputMapper::new();

    let click = mapper
        .map(InputEvent::Click { x: 3.0, y: 4.0 }, &world)
        .expect("click maps to a command");
    assert_eq!(click, Command::TryRemoveWellOrSpawn { x: 3.0, y: 4.0 });
    click.apply(&mut world);
    assert_eq!(world.well_count(), 0);
    assert_eq!(world.body_count(), 0);

    mapper
        .map(InputEvent::Click { x: 3.0, y: 4.0 }, &world)
        .expect("click maps to a command")
        .apply(&mut world);
    assert_eq!(world.body_count(), 1);

    // A click on the new body grabs nothing and spawns nothing.
    assert_eq!(mapper.map(InputEvent::Click { x: 3.0, y: 4.0 }, &world), None);
}

#[test]
fn key_bindings_drive_the_world() {
    let mut world = World::with_seed(0);
    let mut mapper = InputMapper::new();
    for key in [Key::G, Key::G, Key::Up, Key::Up, Key::Down] {
        if let Some(command) = mapper.map(InputEvent::Key(key), &world) {
            command.apply(&mut world);
        }
    }
    assert_eq!(world.well_count(), 2);
    assert!((world.gravity() + 0.25).abs() < 1e-12);

    mapper
        .map(InputEvent::Key(Key::C), &world)
        .expect("clear binding")
        .apply(&mut world);
    assert_eq!(world.well_count(), 0);
}

#[test]
fn controls_help_mentions_every_binding() {
    for needle in ["Click", "G:", "C:", "Up/Down"] {
        assert!(CONTROLS_HELP.contains(needle));
    }
}
