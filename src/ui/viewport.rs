//! Mapping between terminal cells and normalized arena space.
//!
//! Arena space runs -1..1 on both axes with +y up; terminal rows grow down.
//! A cell maps to the arena point at its centre.

use ratatui::layout::{Position, Rect};

use crate::game::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Viewport of the arena for a whole terminal screen
    pub fn for_screen(screen: Rect) -> Self {
        Self::new(super::screen_layout(screen).arena)
    }

    /// Arena point at the centre of a terminal cell, if the cell is inside
    pub fn to_arena(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let fx = ((column - self.area.x) as f32 + 0.5) / self.area.width as f32;
        let fy = ((row - self.area.y) as f32 + 0.5) / self.area.height as f32;
        Some((fx * 2.0 - 1.0, 1.0 - fy * 2.0))
    }

    /// Terminal cell containing an arena point
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if self.area.is_empty() || !(-1.0..=1.0).contains(&x) || !(-1.0..=1.0).contains(&y) {
            return None;
        }
        let col = scale_floor((x + 1.0) / 2.0, self.area.width);
        let row = scale_floor((1.0 - y) / 2.0, self.area.height);
        Some((self.area.x + col, self.area.y + row))
    }

    /// Columns and rows (relative to the area) of every cell a rectangle touches
    pub fn cell_span(&self, bounds: &Bounds) -> (std::ops::Range<u16>, std::ops::Range<u16>) {
        let cols = span(
            (bounds.left + 1.0) / 2.0,
            (bounds.right() + 1.0) / 2.0,
            self.area.width,
        );
        let rows = span(
            (1.0 - bounds.top()) / 2.0,
            (1.0 - bounds.bottom) / 2.0,
            self.area.height,
        );
        (cols, rows)
    }
}

/// Index of the cell holding fraction `f` of `len` cells, clamped in range
fn scale_floor(f: f32, len: u16) -> u16 {
    ((f * len as f32).floor().max(0.0) as u16).min(len.saturating_sub(1))
}

fn span(start: f32, end: f32, len: u16) -> std::ops::Range<u16> {
    let lo = (start * len as f32).floor().clamp(0.0, len as f32) as u16;
    let hi = (end * len as f32).ceil().clamp(0.0, len as f32) as u16;
    lo..hi.max(lo)
}
