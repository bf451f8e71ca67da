//! Fixed-cadence loop that feeds queued commands into a [`World`] and hands
//! each resulting frame to an external renderer.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use crate::utils::{allocator::EntityId, logging::warn_if_tick_budget_exceeded};
use crate::world::{World, WorldSnapshot};

/// A discrete request from the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SpawnBody { x: f64, y: f64 },
    SpawnWell { at: Option<(f64, f64)> },
    TryRemoveWellOrSpawn { x: f64, y: f64 },
    ClearWorld,
    IncreaseGravity,
    DecreaseGravity,
    BeginDrag { id: EntityId, x: f64, y: f64 },
    UpdateDrag { id: EntityId, x: f64, y: f64 },
    EndDrag { id: EntityId },
}

impl Command {
    /// Applies the command to `world` immediately.
    pub fn apply(self, world: &mut World) {
        match self {
            Command::SpawnBody { x, y } => {
                world.spawn_body(x, y);
            }
            Command::SpawnWell { at } => {
                world.spawn_well(at);
            }
            Command::TryRemoveWellOrSpawn { x, y } => {
                world.try_remove_well(x, y);
            }
            Command::ClearWorld => world.clear_world(),
            Command::IncreaseGravity => world.increase_gravity(),
            Command::DecreaseGravity => world.decrease_gravity(),
            Command::BeginDrag { id, x, y } => {
                world.begin_drag(id, x, y);
            }
            Command::UpdateDrag { id, x, y } => {
                world.update_drag(id, x, y);
            }
            Command::EndDrag { id } => {
                world.end_drag(id);
            }
        }
    }
}

/// FIFO of commands shared between the input side and the driver.
///
/// Cloning gives another handle to the same queue, so input can be produced on any thread.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    inner: Arc<Mutex<VecDeque<Command>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, command: Command) {
        self.inner.lock().push_back(command);
    }

    pub fn extend<I: IntoIterator<Item = Command>>(&self, commands: I) {
        self.inner.lock().extend(commands);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Takes every pending command, oldest first.
    pub fn drain(&self) -> Vec<Command> {
        self.inner.lock().drain(..).collect()
    }
}

/// Receives one snapshot per tick. Implemented by whatever draws the world.
pub trait FrameSink {
    fn present(&mut self, frame: &WorldSnapshot);
}

/// Sink that discards frames, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _frame: &WorldSnapshot) {}
}

impl<F> FrameSink for F
where
    F: FnMut(&WorldSnapshot),
{
    fn present(&mut self, frame: &WorldSnapshot) {
        self(frame)
    }
}

/// Owns the world and ticks it at a fixed cadence.
pub struct Driver<S: FrameSink = NullSink> {
    world: World,
    commands: CommandQueue,
    sink: S,
    interval: Duration,
}

impl Driver<NullSink> {
    pub fn headless(world: World) -> Self {
        Self::new(world, NullSink)
    }
}

impl<S: FrameSink> Driver<S> {
    pub fn new(world: World, sink: S) -> Self {
        let interval = world.config().tick_interval();
        Self {
            world,
            commands: CommandQueue::new(),
            sink,
            interval,
        }
    }

    /// Overrides the cadence taken from the world's configuration.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle the input layer pushes commands through.
    pub fn commands(&self) -> CommandQueue {
        self.commands.clone()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (World, S) {
        (self.world, self.sink)
    }

    /// Applies pending commands in arrival order, steps once, and presents the frame.
    /// Never sleeps.
    pub fn tick(&mut self) {
        let pending = self.commands.drain();
        if !pending.is_empty() {
            log::debug!("applying {} queued commands", pending.len());
        }
        for command in pending {
            command.apply(&mut self.world);
        }
        self.world.step();
        let frame = self.world.snapshot();
        self.sink.present(&frame);
    }

    /// Runs `ticks` ticks at the configured cadence.
    pub fn run_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.paced_tick();
        }
    }

    /// Runs until `stop` is set. Checked once per tick.
    pub fn run_until(&mut self, stop: &AtomicBool) -> u64 {
        let mut ticks = 0;
        while !stop.load(Ordering::Relaxed) {
            self.paced_tick();
            ticks += 1;
        }
        log::info!("driver stopped after {ticks} ticks");
        ticks
    }

    fn paced_tick(&mut self) {
        let start = Instant::now();
        self.tick();
        let elapsed = start.elapsed();
        if !warn_if_tick_budget_exceeded(elapsed, self.interval) {
            std::thread::sleep(self.interval - elapsed);
        }
    }
}
