use ratatui::prelude::*;

use crate::game::consts::PADDLE_BOTTOM;
use crate::game::{Bounds, GameState, GameWorld, Grid};
use crate::ui::canvas::Canvas;
use crate::ui::palette;

/// Draw bricks, paddle and ball into an arena-sized canvas
pub fn render_field(world: &GameWorld, width: u16, height: u16, frame: u64) -> Vec<Line<'static>> {
    let mut canvas = Canvas::new(width, height, frame);

    // Bricks
    for (row, col) in world.grid.alive_cells() {
        let style = Style::default().fg(palette::brick_color(world.session.brick_color, row));
        canvas.fill(&Grid::cell_bounds(row, col), style, |first, last| {
            if first {
                '▐'
            } else if last {
                '▌'
            } else {
                '█'
            }
        });
    }

    // Paddle
    let paddle = &world.paddle;
    let paddle_bounds = Bounds::new(paddle.left(), PADDLE_BOTTOM, paddle.width, paddle.height);
    let paddle_style = Style::default()
        .fg(palette::color(world.session.paddle_color))
        .add_modifier(Modifier::BOLD);
    canvas.fill(&paddle_bounds, paddle_style, |first, last| {
        if first {
            '╣'
        } else if last {
            '╠'
        } else {
            '▓'
        }
    });

    // Ball, with a one-cell trail while in flight
    let ball = &world.ball;
    if let Some((bx, by)) = canvas.cell_of(ball.x, ball.y) {
        if ball.launched {
            if let Some((tx, ty)) = canvas.cell_of(ball.x - ball.dx * 2.0, ball.y - ball.dy * 2.0) {
                if (tx, ty) != (bx, by) {
                    canvas.put(tx, ty, '·', Style::default().fg(Color::Rgb(100, 100, 120)));
                }
            }
        }
        canvas.put(
            bx,
            by,
            '●',
            Style::default()
                .fg(palette::color(world.session.ball_color))
                .add_modifier(Modifier::BOLD),
        );
    }

    if !ball.launched && world.state == GameState::Playing {
        canvas.text_centered(
            0.0,
            "Press SPACE to launch!",
            Style::default().fg(Color::Rgb(204, 204, 51)).add_modifier(Modifier::BOLD),
        );
    }

    if world.state == GameState::Paused {
        let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        canvas.text_centered(0.1, "PAUSED", style);
        canvas.text_centered(-0.1, "Press P to continue", Style::default().fg(Color::Yellow));
    }

    canvas.into_lines()
}
