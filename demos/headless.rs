use gravity_sandbox::*;
use std::time::Duration;

/// Prints a one-line summary of every 30th frame.
struct LogSink;

impl FrameSink for LogSink {
    fn present(&mut self, frame: &WorldSnapshot) {
        if frame.tick % 30 != 0 {
            return;
        }
        let lowest = frame
            .bodies
            .iter()
            .map(|b| b.position.y)
            .fold(f64::INFINITY, f64::min);
        log::info!(
            "tick {:>4}: {} bodies, {} wells, gravity {:.2}, lowest y {:.1}",
            frame.tick,
            frame.bodies.len(),
            frame.wells.len(),
            frame.gravity,
            lowest
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    println!("{CONTROLS_HELP}");

    let world = World::with_seed(2024);
    let mut driver = Driver::new(world, LogSink).with_interval(Duration::from_millis(1));
    let mut mapper = InputMapper::new();
    let queue = driver.commands();

    let script = [
        InputEvent::Key(Key::G),
        InputEvent::Click { x: -200.0, y: 150.0 },
        InputEvent::Click { x: -50.0, y: 200.0 },
        InputEvent::Click { x: 100.0, y: 180.0 },
        InputEvent::Click { x: 250.0, y: 120.0 },
        InputEvent::Key(Key::Up),
    ];
    for event in script {
        if let Some(command) = mapper.map(event, driver.world()) {
            queue.push(command);
        }
    }

    driver.run_ticks(300);

    let (world, _sink) = driver.into_parts();
    println!(
        "after {} ticks: {} bodies, kinetic energy {:.2}",
        world.tick_count(),
        world.body_count(),
        world.kinetic_energy()
    );
    for body in world.bodies() {
        let [r, g, b] = body.color.rgb();
        println!(
            "  {} {} #{r:02x}{g:02x}{b:02x} at ({:.1}, {:.1})",
            body.id,
            body.shape.name(),
            body.position.x,
            body.position.y
        );
    }
}
