use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;

use crate::game::{input, sim, GameState, Phase};
use crate::ui::{self, Viewport};

/// Paddle movement per arrow key press, in playfield units
const NUDGE_STEP: f32 = 20.0;

pub struct App {
    pub should_quit: bool,
    pub state: GameState,
    /// Screen placement of the playfield from the last draw
    viewport: Option<Viewport>,
}

impl App {
    pub fn new(state: GameState) -> Self {
        Self {
            should_quit: false,
            state,
            viewport: None,
        }
    }

    pub fn on_tick(&mut self) {
        let before = self.state.phase;
        sim::tick(&mut self.state);
        let after = self.state.phase;
        if before != after && after.is_terminal() {
            match after {
                Phase::Won => log::info!("all blocks destroyed after {} ticks", self.state.ticks),
                Phase::Lost => log::info!(
                    "ball lost after {} ticks with {} blocks left",
                    self.state.ticks,
                    self.state.blocks_alive()
                ),
                _ => {}
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.viewport = Some(ui::render(frame, &self.state));
    }

    fn start(&mut self) {
        if input::start_pressed(&mut self.state) {
            log::info!("game started");
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter => self.start(),
            KeyCode::Left => input::nudge(&mut self.state, -NUDGE_STEP),
            KeyCode::Right => input::nudge(&mut self.state, NUDGE_STEP),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                // Nothing to map against until the first frame is drawn
                if let Some(viewport) = self.viewport {
                    input::pointer_moved(&mut self.state, viewport.field_x(mouse.column));
                }
            }
            MouseEventKind::Down(MouseButton::Left) => self.start(),
            _ => {}
        }
    }
}
