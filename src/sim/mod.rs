//! Fixed-tick simulation for the shooter: entities, timers, collision and
//! the pause/game-over state machine. Nothing in here touches the terminal.
//! Callers supply the clock (milliseconds since start) and the random
//! source, so a tick sequence is fully reproducible from its inputs.

pub mod collision;
pub mod entities;
pub mod spawner;
pub mod state;

pub use entities::{Block, Bullet, Player};
pub use state::Simulation;

// Logical playfield in virtual pixels; the renderer scales to the terminal.
pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 600.0;

/// Held-direction snapshot consumed once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}
