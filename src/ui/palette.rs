use ratatui::style::Color;

use crate::game::consts::PALETTE_SIZE;

pub const COLOR_NAMES: [&str; PALETTE_SIZE] = [
    "Red", "Blue", "Green", "Purple", "Yellow", "Cyan", "White", "Orange",
];

const COLORS: [Color; PALETTE_SIZE] = [
    Color::Rgb(240, 89, 99),   // Red
    Color::Rgb(51, 173, 227),  // Blue
    Color::Rgb(89, 227, 128),  // Green
    Color::Rgb(173, 130, 227), // Purple
    Color::Rgb(250, 196, 69),  // Yellow
    Color::Rgb(69, 240, 227),  // Cyan
    Color::Rgb(242, 242, 242), // White
    Color::Rgb(255, 125, 79),  // Orange
];

pub fn color(index: usize) -> Color {
    COLORS[index % PALETTE_SIZE]
}

pub fn name(index: usize) -> &'static str {
    COLOR_NAMES[index % PALETTE_SIZE]
}

/// Each brick row is offset one step along the palette
pub fn brick_color(base: usize, row: usize) -> Color {
    color(base + row)
}

/// Slowly shifting background, blended from the bottom colour to the top one.
/// `t` runs 0 at the bottom row to 1 at the top.
pub fn background(frame: u64, t: f32) -> Color {
    let a = frame as f32 * 0.01;
    let bottom = [
        0.05 + 0.02 * a.sin(),
        0.05 + 0.02 * (a * 1.3).cos(),
        0.15 + 0.03 * (a * 0.7).sin(),
    ];
    let top = [
        0.15 + 0.03 * (a * 1.1).sin(),
        0.10 + 0.02 * a.cos(),
        0.25 + 0.04 * (a * 1.5).sin(),
    ];
    let mix = |i: usize| {
        let v = bottom[i] + (top[i] - bottom[i]) * t.clamp(0.0, 1.0);
        (v * 255.0).round() as u8
    };
    Color::Rgb(mix(0), mix(1), mix(2))
}

/// Title colour for the menu banner
pub fn title(frame: u64) -> Color {
    let f = frame as f32;
    let r = 0.4 + 0.3 * (f * 0.05).sin();
    let g = 0.8 + 0.2 * (f * 0.03).cos();
    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_rows_wrap_palette() {
        assert_eq!(brick_color(1, 0), color(1));
        assert_eq!(brick_color(7, 1), color(0));
        assert_eq!(name(10), "Green");
    }

    #[test]
    fn test_background_stays_dark() {
        for frame in [0, 100, 12_345] {
            for t in [0.0, 0.5, 1.0] {
                let Color::Rgb(r, g, b) = background(frame, t) else {
                    panic!("expected rgb");
                };
                assert!(r < 80 && g < 80 && b < 80);
            }
        }
    }
}
