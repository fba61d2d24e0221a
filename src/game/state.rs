//! Entities and game state
//!
//! `GameState` is the single owner of every entity. The simulation is the
//! only writer of ball and block state; input only touches `paddle.x` and
//! the start transition.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::geometry::Rect;
use crate::config::GameConfig;

/// Block colors, assigned by row from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockColor {
    Purple,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl BlockColor {
    pub const ROWS: [BlockColor; 6] = [
        BlockColor::Purple,
        BlockColor::Blue,
        BlockColor::Green,
        BlockColor::Yellow,
        BlockColor::Orange,
        BlockColor::Red,
    ];

    pub fn for_row(row: usize) -> Self {
        Self::ROWS[row % Self::ROWS.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub color: BlockColor,
    /// Goes false once when the block is hit and never comes back
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Left edge, follows the pointer and may leave the playfield
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The ball is a square for collision purposes
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

/// Current phase of the game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Playfield size in game units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

pub struct GameState {
    pub config: GameConfig,
    pub playfield: Playfield,
    pub phase: Phase,
    pub blocks: Vec<Block>,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Simulation ticks run while playing
    pub ticks: u64,
    /// Source of paddle spin
    pub(crate) rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let playfield = Playfield {
            width: config.screen_width(),
            height: config.screen_height(),
        };
        let paddle = Paddle {
            x: playfield.width / 2.0 - config.paddle_width / 2.0,
            y: playfield.height - config.paddle_height - config.block_margin,
            width: config.paddle_width,
            height: config.paddle_height,
        };
        let ball = Ball {
            x: playfield.width / 2.0 - config.ball_size / 2.0,
            y: playfield.height / 2.0 - config.ball_size / 2.0,
            size: config.ball_size,
            velocity_x: 0.0,
            velocity_y: 0.0,
        };

        let mut state = Self {
            config,
            playfield,
            phase: Phase::NotStarted,
            blocks: Vec::with_capacity(config.rows * config.columns),
            paddle,
            ball,
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        state.init_blocks();
        state
    }

    fn init_blocks(&mut self) {
        self.blocks.clear();
        let cell_w = self.config.cell_width();
        let cell_h = self.config.cell_height();
        let margin = self.config.block_margin;

        for row in 0..self.config.rows {
            for col in 0..self.config.columns {
                self.blocks.push(Block {
                    x: col as f32 * cell_w + margin,
                    y: row as f32 * cell_h + margin,
                    color: BlockColor::for_row(row),
                    alive: true,
                });
            }
        }
    }

    pub fn block_rect(&self, block: &Block) -> Rect {
        Rect::new(block.x, block.y, self.config.block_width, self.config.block_height)
    }

    pub fn blocks_alive(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.blocks.len(), 60);
        assert_eq!(state.blocks_alive(), 60);

        // Ball centered, at rest
        assert_eq!(state.ball.x, 260.0);
        assert_eq!(state.ball.y, 262.0);
        assert_eq!((state.ball.velocity_x, state.ball.velocity_y), (0.0, 0.0));

        // Paddle centered near the bottom
        assert_eq!(state.paddle.x, 220.0);
        assert_eq!(state.paddle.y, 544.0 - 20.0 - 2.0);
    }

    #[test]
    fn test_block_grid_positions_and_colors() {
        let state = GameState::new(GameConfig::default(), 1);
        let first = &state.blocks[0];
        assert_eq!((first.x, first.y), (2.0, 2.0));
        assert_eq!(first.color, BlockColor::Purple);

        // Row-major: index 11 is row 1, column 1
        let b = &state.blocks[11];
        assert_eq!((b.x, b.y), (56.0, 26.0));
        assert_eq!(b.color, BlockColor::Blue);

        let last = state.blocks.last().unwrap();
        assert_eq!(last.color, BlockColor::Red);
    }

    #[test]
    fn test_colors_cycle_past_six_rows() {
        assert_eq!(BlockColor::for_row(6), BlockColor::Purple);
        assert_eq!(BlockColor::for_row(11), BlockColor::Red);
    }

    #[test]
    fn test_blocks_do_not_touch() {
        let state = GameState::new(GameConfig::default(), 1);
        let a = state.block_rect(&state.blocks[0]);
        let b = state.block_rect(&state.blocks[1]);
        assert!(!a.overlaps(&b));
        assert_eq!(b.x - a.right(), 4.0);
    }
}
