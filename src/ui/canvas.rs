//! Drawing surface for the playfield
//!
//! `Canvas` is the minimal interface the scene is drawn through.
//! `CellCanvas` rasterises playfield coordinates into terminal cells, two
//! pixels per cell stacked vertically.

use ratatui::prelude::*;

use crate::game::Rect as FieldRect;

pub trait Canvas {
    /// Fill a rectangle given in playfield units.
    fn fill_rect(&mut self, rect: FieldRect, color: Color);
    /// Draw one line of text centered on the playfield.
    fn fill_text(&mut self, text: &str, color: Color);
}

/// Pixel grid over a terminal area with half-block resolution.
pub struct CellCanvas {
    cols: usize,
    rows: usize,
    /// Pixels per playfield unit
    sx: f32,
    sy: f32,
    background: Color,
    /// `cols * rows * 2` pixels, row-major
    pixels: Vec<Color>,
    text: Option<(String, Color)>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16, field_width: f32, field_height: f32, background: Color) -> Self {
        let cols = cols as usize;
        let rows = rows as usize;
        Self {
            cols,
            rows,
            sx: cols as f32 / field_width,
            sy: (rows * 2) as f32 / field_height,
            background,
            pixels: vec![background; cols * rows * 2],
            text: None,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.cols + x]
    }

    /// Pixel span covered by `[start, end)` in playfield units. A span
    /// thinner than one pixel still shows up if it lies on the grid.
    fn span(start: f32, end: f32, scale: f32, len: usize) -> (usize, usize) {
        let lo = (start * scale - 0.5).ceil();
        let mut hi = (end * scale - 0.5).ceil();
        if hi <= lo && lo >= 0.0 && end > start {
            hi = lo + 1.0;
        }
        let lo = lo.clamp(0.0, len as f32) as usize;
        let hi = hi.clamp(0.0, len as f32) as usize;
        (lo, hi.max(lo))
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = (0..self.rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..self.cols)
                    .map(|col| {
                        let top = self.pixel(col, row * 2);
                        let bottom = self.pixel(col, row * 2 + 1);
                        Span::styled("▀", Style::default().fg(top).bg(bottom))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        if let Some((text, color)) = self.text {
            if self.rows > 0 {
                let width = text.chars().count().min(self.cols);
                let pad = (self.cols - width) / 2;
                let text: String = text.chars().take(width).collect();
                let row = self.rows / 2;
                lines[row] = Line::from(vec![
                    Span::styled(" ".repeat(pad), Style::default().bg(self.background)),
                    Span::styled(
                        text,
                        Style::default().fg(color).bg(self.background).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" ".repeat(self.cols - pad - width), Style::default().bg(self.background)),
                ]);
            }
        }
        lines
    }
}

impl Canvas for CellCanvas {
    fn fill_rect(&mut self, rect: FieldRect, color: Color) {
        let (x0, x1) = Self::span(rect.x, rect.right(), self.sx, self.cols);
        let (y0, y1) = Self::span(rect.y, rect.bottom(), self.sy, self.rows * 2);
        for y in y0..y1 {
            let row = y * self.cols;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }

    fn fill_text(&mut self, text: &str, color: Color) {
        self.text = Some((text.to_string(), color));
    }
}
