use ratatui::style::Color;

use super::canvas::Canvas;
use crate::game::{BlockColor, GameState, Phase};

pub const INK: Color = Color::Rgb(0, 0, 0);
pub const PAPER: Color = Color::Rgb(245, 245, 245);

pub fn status_text(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::NotStarted => Some("Click to start"),
        Phase::Won => Some("You won :)"),
        Phase::Lost => Some("You lost :("),
        Phase::Playing => None,
    }
}

pub fn block_color(color: BlockColor) -> Color {
    match color {
        BlockColor::Purple => Color::Rgb(128, 0, 128),
        BlockColor::Blue => Color::Rgb(0, 0, 255),
        BlockColor::Green => Color::Rgb(0, 128, 0),
        BlockColor::Yellow => Color::Rgb(255, 255, 0),
        BlockColor::Orange => Color::Rgb(255, 165, 0),
        BlockColor::Red => Color::Rgb(255, 0, 0),
    }
}

/// Draw one frame of the game.
///
/// Outside of play only the status line is shown.
pub fn draw(state: &GameState, canvas: &mut impl Canvas) {
    if let Some(text) = status_text(state.phase) {
        canvas.fill_text(text, INK);
        return;
    }

    for block in state.blocks.iter().filter(|b| b.alive) {
        canvas.fill_rect(state.block_rect(block), block_color(block.color));
    }
    canvas.fill_rect(state.paddle.rect(), INK);
    canvas.fill_rect(state.ball.rect(), INK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::{sim, Rect};

    #[derive(Debug, PartialEq)]
    enum Op {
        Rect(Rect, Color),
        Text(String, Color),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ops.push(Op::Rect(rect, color));
        }

        fn fill_text(&mut self, text: &str, color: Color) {
            self.ops.push(Op::Text(text.to_string(), color));
        }
    }

    fn record(state: &GameState) -> Vec<Op> {
        let mut recorder = Recorder::default();
        draw(state, &mut recorder);
        recorder.ops
    }

    #[test]
    fn test_not_started_shows_only_prompt() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(record(&state), vec![Op::Text("Click to start".into(), INK)]);
    }

    #[test]
    fn test_terminal_phases_show_only_message() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.phase = Phase::Won;
        assert_eq!(record(&state), vec![Op::Text("You won :)".into(), INK)]);
        state.phase = Phase::Lost;
        assert_eq!(record(&state), vec![Op::Text("You lost :(".into(), INK)]);
    }

    #[test]
    fn test_playing_draws_blocks_then_paddle_then_ball() {
        let mut state = GameState::new(GameConfig::default(), 1);
        sim::start(&mut state);
        state.blocks[0].alive = false;
        state.blocks[59].alive = false;

        let ops = record(&state);
        assert_eq!(ops.len(), 58 + 2);
        assert_eq!(
            ops[0],
            Op::Rect(Rect::new(56.0, 2.0, 50.0, 20.0), block_color(BlockColor::Purple))
        );
        assert_eq!(ops[58], Op::Rect(state.paddle.rect(), INK));
        assert_eq!(ops[59], Op::Rect(state.ball.rect(), INK));
        assert!(!ops.iter().any(|op| matches!(op, Op::Text(..))));
    }
}
