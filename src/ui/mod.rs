pub mod canvas;
pub mod scene;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::{GameState, Phase, Playfield};
use canvas::CellCanvas;

/// Where the playfield landed on screen during the last frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub playfield: Playfield,
}

impl Viewport {
    /// Playfield x coordinate under a terminal column, measured at the
    /// center of the cell. Columns outside the viewport map outside the
    /// playfield.
    pub fn field_x(&self, column: u16) -> f32 {
        let cols = self.area.width.max(1) as f32;
        let offset = column as f32 - self.area.x as f32 + 0.5;
        offset * self.playfield.width / cols
    }
}

pub fn render(frame: &mut Frame, state: &GameState) -> Viewport {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" Breakout ")
        .title_style(Style::default().fg(Color::Rgb(255, 100, 100)).add_modifier(Modifier::BOLD));

    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let field_area = chunks[0];
    let mut canvas = CellCanvas::new(
        field_area.width,
        field_area.height,
        state.playfield.width,
        state.playfield.height,
        scene::PAPER,
    );
    scene::draw(state, &mut canvas);
    frame.render_widget(Paragraph::new(canvas.into_lines()), field_area);

    frame.render_widget(Paragraph::new(help_line(state.phase)), chunks[1]);

    Viewport {
        area: field_area,
        playfield: state.playfield,
    }
}

fn help_line(phase: Phase) -> Line<'static> {
    let sep = Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));
    let key = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let mut spans = vec![key(" Mouse/←→ Move Paddle "), sep.clone()];
    if phase == Phase::NotStarted {
        spans.push(Span::styled(
            "Click/SPACE Start ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(sep);
    }
    spans.push(key("Q/Esc Quit"));
    Line::from(spans)
}
