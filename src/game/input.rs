//! Player input applied to the game state
//!
//! Input only writes the paddle position and requests the start
//! transition. The paddle is never clamped to the playfield.

use super::sim;
use super::state::GameState;

/// Center the paddle on the pointer's x coordinate.
pub fn pointer_moved(state: &mut GameState, pointer_x: f32) {
    state.paddle.x = pointer_x - state.paddle.width / 2.0;
}

/// Shift the paddle sideways by `dx` units.
pub fn nudge(state: &mut GameState, dx: f32) {
    state.paddle.x += dx;
}

/// Click or key press that starts the game. No effect once started.
pub fn start_pressed(state: &mut GameState) -> bool {
    sim::start(state)
}
