//! Fixed timestep simulation
//!
//! One call to `tick` is one frame of motion; velocities are in units per
//! tick and there is no delta-time scaling.

use rand::Rng;

use super::geometry::{overlaps, Rect};
use super::state::{GameState, Phase};

/// Leave `NotStarted` and launch the ball straight down.
///
/// Returns false if the game was already started.
pub fn start(state: &mut GameState) -> bool {
    if state.phase != Phase::NotStarted {
        return false;
    }
    state.phase = Phase::Playing;
    state.ball.velocity_y = state.config.launch_speed;
    true
}

/// Advance the game by one tick. Does nothing unless the game is playing.
pub fn tick(state: &mut GameState) {
    if state.phase != Phase::Playing {
        return;
    }
    state.ticks += 1;

    let ball = &mut state.ball;
    ball.x += ball.velocity_x;
    ball.y += ball.velocity_y;

    // Paddle: only a falling ball bounces
    if ball.rect().overlaps(&state.paddle.rect()) && ball.velocity_y > 0.0 {
        ball.velocity_y = -ball.velocity_y;
        let spin = state.config.spin;
        let delta = if spin > 0.0 { state.rng.gen_range(-spin..=spin) } else { 0.0 };
        ball.velocity_x += delta;
        log::trace!("paddle bounce at tick {}, spin {:+.3}", state.ticks, delta);
    }

    // Walls
    if ball.y <= 0.0 && ball.velocity_y < 0.0 {
        ball.velocity_y = -ball.velocity_y;
    }
    if ball.x <= 0.0 && ball.velocity_x < 0.0 {
        ball.velocity_x = -ball.velocity_x;
    }
    if ball.x + ball.size >= state.playfield.width && ball.velocity_x > 0.0 {
        ball.velocity_x = -ball.velocity_x;
    }

    if ball.y + ball.size >= state.playfield.height {
        state.phase = Phase::Lost;
        return;
    }

    // Every overlapping block dies. Only a rising ball is turned around.
    let ball_rect = ball.rect();
    let (block_w, block_h) = (state.config.block_width, state.config.block_height);
    for (idx, block) in state.blocks.iter_mut().enumerate() {
        if !block.alive {
            continue;
        }
        let block_rect = Rect::new(block.x, block.y, block_w, block_h);
        if overlaps(&block_rect, &ball_rect) {
            block.alive = false;
            log::debug!("block {} destroyed at tick {}", idx, state.ticks);
            if ball.velocity_y < 0.0 {
                ball.velocity_y = -ball.velocity_y;
            }
        }
    }

    if state.blocks.iter().all(|b| !b.alive) {
        state.phase = Phase::Won;
    }
}
