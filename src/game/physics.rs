//! One fixed-step physics update.
//!
//! Resolution order per tick: walls, paddle, at most one brick, miss.

use super::consts::*;
use super::grid::Grid;
use super::state::GameState;
use super::world::{Ball, GameWorld, Paddle};

/// Things that happened during a tick, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { row: usize, col: usize, points: u32 },
    LevelCleared { next_level: u32 },
    LifeLost { lives_left: u32 },
    GameOver { final_score: u32 },
}

/// Advance the world by one step. Does nothing unless Playing.
pub fn tick(world: &mut GameWorld) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.state != GameState::Playing {
        return events;
    }
    if !world.ball.launched {
        world.ball.follow(&world.paddle);
        return events;
    }

    let ball = &mut world.ball;
    ball.x += ball.dx;
    ball.y += ball.dy;

    reflect_off_walls(ball);
    bounce_off_paddle(ball, &world.paddle);

    if let Some((row, col)) = first_brick_hit(&world.grid, ball) {
        world.grid.kill(row, col);
        ball.dy = -ball.dy;
        let points = world.session.brick_points();
        world.session.score += points;
        events.push(GameEvent::BrickDestroyed { row, col, points });

        if world.grid.is_cleared() {
            world.session.level += 1;
            world.reseed_grid();
            events.push(GameEvent::LevelCleared {
                next_level: world.session.level,
            });
        }
    }

    if world.ball.y < ARENA_MIN {
        world.session.lives = world.session.lives.saturating_sub(1);
        if world.session.lives == 0 {
            world.state = GameState::GameOver;
            events.push(GameEvent::GameOver {
                final_score: world.session.score,
            });
        } else {
            world.ball.rest_on(&world.paddle);
            events.push(GameEvent::LifeLost {
                lives_left: world.session.lives,
            });
        }
    }

    events
}

/// Side walls flip dx, the ceiling flips dy. The floor is open.
pub fn reflect_off_walls(ball: &mut Ball) {
    if ball.x + ball.radius > ARENA_MAX || ball.x - ball.radius < ARENA_MIN {
        ball.dx = -ball.dx;
    }
    if ball.y + ball.radius > ARENA_MAX {
        ball.dy = -ball.dy;
    }
}

/// Send the ball back up with an angle set by where it struck the paddle.
/// Returns whether a bounce happened.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let below_top = ball.y - ball.radius < paddle.top();
    let within_span = ball.x > paddle.left() && ball.x < paddle.right();
    if !(below_top && within_span) {
        return false;
    }

    let offset = (ball.x - paddle.x) / (paddle.width / 2.0);
    (ball.dx, ball.dy) = bounce_velocity(offset);
    true
}

/// Outgoing velocity for a normalized impact offset (-1 at the left edge,
/// 1 at the right). Total speed is always `sqrt(BOUNCE_SPEED_SQUARED)` and dy
/// is never negative.
pub fn bounce_velocity(offset: f32) -> (f32, f32) {
    let max_dx = BOUNCE_SPEED_SQUARED.sqrt();
    let dx = (offset * BOUNCE_SPEED_SCALE).clamp(-max_dx, max_dx);
    // clamped above, but rounding can still dip below zero
    let dy = (BOUNCE_SPEED_SQUARED - dx * dx).max(0.0).sqrt();
    (dx, dy)
}

/// First alive brick overlapping the ball, scanning row-major
pub fn first_brick_hit(grid: &Grid, ball: &Ball) -> Option<(usize, usize)> {
    grid.alive_cells()
        .find(|&(row, col)| Grid::cell_bounds(row, col).overlaps_circle(ball.x, ball.y, ball.radius))
}
