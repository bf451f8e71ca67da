//! Operator controls: turns raw pointer and key events into [`Command`]s.

use crate::driver::Command;
use crate::utils::allocator::EntityId;
use crate::world::World;

/// Text a renderer can show as the controls menu.
pub const CONTROLS_HELP: &str =
    "Controls:\nClick: Create Shape\nG: Create Gravity Well\nC: Clear Screen\nUp/Down: Adjust Gravity";

/// Keys the sandbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    C,
    G,
    Up,
    Down,
    Other,
}

/// Pointer and keyboard events in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button went down.
    Press { x: f64, y: f64 },
    /// Pointer moved with the button held.
    Drag { x: f64, y: f64 },
    /// Button went up.
    Release { x: f64, y: f64 },
    /// Press and release at the same spot.
    Click { x: f64, y: f64 },
    Key(Key),
}

/// Tracks which body, if any, the pointer is holding.
#[derive(Debug, Default, Clone)]
pub struct InputMapper {
    held: Option<EntityId>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<EntityId> {
        self.held
    }

    /// Maps one event to at most one command. `world` is only read, to find the body
    /// under the pointer.
    pub fn map(&mut self, event: InputEvent, world: &World) -> Option<Command> {
        match event {
            InputEvent::Press { x, y } => {
                let id = world.pick_body(x, y)?;
                self.held = Some(id);
                Some(Command::BeginDrag { id, x, y })
            }
            InputEvent::Drag { x, y } => self.held.map(|id| Command::UpdateDrag { id, x, y }),
            InputEvent::Release { .. } => self.held.take().map(|id| Command::EndDrag { id }),
            InputEvent::Click { x, y } => {
                // Clicking a body grabs it rather than spawning on top of it.
                if world.pick_body(x, y).is_some() {
                    return None;
                }
                Some(Command::TryRemoveWellOrSpawn { x, y })
            }
            InputEvent::Key(key) => match key {
                Key::C => {
                    self.held = None;
                    Some(Command::ClearWorld)
                }
                Key::Up => Some(Command::IncreaseGravity),
                Key::Down => Some(Command::DecreaseGravity),
                Key::G => Some(Command::SpawnWell { at: None }),
                Key::Other => None,
            },
        }
    }
}
