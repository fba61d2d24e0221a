//! Breakout simulation: entities, collision and the tick loop.
//!
//! Nothing in here knows about the terminal.

pub mod geometry;
pub mod input;
pub mod sim;
pub mod state;

pub use geometry::Rect;
pub use state::{BlockColor, GameState, Phase, Playfield};
