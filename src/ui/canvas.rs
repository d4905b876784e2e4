use ratatui::prelude::*;

use crate::game::Bounds;
use crate::ui::palette;
use crate::ui::viewport::Viewport;

/// Character buffer for one arena-sized frame, addressed in arena space
pub struct Canvas {
    cells: Vec<Vec<(char, Style)>>,
    viewport: Viewport,
}

impl Canvas {
    /// Blank canvas filled with the animated background gradient
    pub fn new(width: u16, height: u16, frame: u64) -> Self {
        let cells = (0..height)
            .map(|row| {
                let t = if height > 1 {
                    1.0 - row as f32 / (height - 1) as f32
                } else {
                    0.5
                };
                let bg = palette::background(frame, t);
                vec![(' ', Style::default().bg(bg)); width as usize]
            })
            .collect();
        Self {
            cells,
            viewport: Viewport::new(Rect::new(0, 0, width, height)),
        }
    }

    fn width(&self) -> u16 {
        self.viewport.area.width
    }

    /// Set one cell, keeping the background colour underneath
    pub fn put(&mut self, col: u16, row: u16, ch: char, fg: Style) {
        if let Some(cell) = self
            .cells
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *cell = (ch, cell.1.patch(fg));
        }
    }

    #[cfg(test)]
    pub fn char_at(&self, col: u16, row: u16) -> Option<char> {
        self.cells.get(row as usize)?.get(col as usize).map(|c| c.0)
    }

    /// Cell under an arena point
    pub fn cell_of(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        self.viewport.to_cell(x, y)
    }

    /// Fill every cell a rectangle touches. `edge` picks the glyph given
    /// (is_first_col, is_last_col).
    pub fn fill(&mut self, bounds: &Bounds, style: Style, edge: impl Fn(bool, bool) -> char) {
        let (cols, rows) = self.viewport.cell_span(bounds);
        let (first, last) = (cols.start, cols.end.saturating_sub(1));
        for row in rows {
            for col in cols.clone() {
                self.put(col, row, edge(col == first, col == last), style);
            }
        }
    }

    /// Write text starting at a cell, clipped at the right edge
    pub fn text(&mut self, col: u16, row: u16, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            let c = col as usize + i;
            if c >= self.width() as usize {
                break;
            }
            self.put(c as u16, row, ch, style);
        }
    }

    /// Text centred horizontally on arena x = 0 at arena height `y`
    pub fn text_centered(&mut self, y: f32, text: &str, style: Style) {
        let Some((_, row)) = self.cell_of(0.0, y) else { return };
        let len = text.chars().count() as u16;
        let col = self.width().saturating_sub(len) / 2;
        self.text(col, row, text, style);
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|(ch, style)| Span::styled(String::from(ch), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
