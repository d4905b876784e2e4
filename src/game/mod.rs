//! Brick-breaking simulation.
//!
//! Everything here works in normalized arena space: both axes run from -1 to 1,
//! origin at the centre, +y pointing up. Nothing in this module knows about the
//! terminal.

pub mod grid;
pub mod physics;
pub mod state;
pub mod world;

pub use grid::Grid;
pub use state::{Action, ColorTarget, GameState, Outcome};
pub use world::{GameWorld, Session};

pub mod consts {
    /// Arena edge on every side
    pub const ARENA_MIN: f32 = -1.0;
    pub const ARENA_MAX: f32 = 1.0;

    pub const BALL_RADIUS: f32 = 0.03;
    /// Launch velocity is `BASE + level * STEP` on each axis
    pub const LAUNCH_BASE_DX: f32 = 0.008;
    pub const LAUNCH_STEP_DX: f32 = 0.002;
    pub const LAUNCH_BASE_DY: f32 = 0.012;
    pub const LAUNCH_STEP_DY: f32 = 0.003;

    pub const PADDLE_WIDTH: f32 = 0.25;
    pub const PADDLE_HEIGHT: f32 = 0.08;
    pub const PADDLE_BOTTOM: f32 = -0.9;
    pub const PADDLE_TOP: f32 = PADDLE_BOTTOM + PADDLE_HEIGHT;
    /// Horizontal distance moved per arrow key press
    pub const PADDLE_NUDGE: f32 = 0.08;

    /// dx after a paddle bounce is the normalized impact offset times this
    pub const BOUNCE_SPEED_SCALE: f32 = 0.01;
    /// Squared ball speed after a paddle bounce
    pub const BOUNCE_SPEED_SQUARED: f32 = 0.0003;

    pub const GRID_ROWS: usize = 6;
    pub const GRID_COLS: usize = 12;
    pub const BRICK_WIDTH: f32 = 0.14;
    pub const BRICK_HEIGHT: f32 = 0.06;
    pub const BRICK_GAP: f32 = 0.02;
    pub const GRID_MARGIN: f32 = 0.1;
    /// Bottom edge of the first row
    pub const GRID_TOP: f32 = 0.7;

    pub const POINTS_PER_BRICK: u32 = 10;
    pub const STARTING_LIVES: u32 = 3;

    pub const PALETTE_SIZE: usize = 8;
    pub const DEFAULT_BALL_COLOR: usize = 0;
    pub const DEFAULT_PADDLE_COLOR: usize = 2;
    pub const DEFAULT_BRICK_COLOR: usize = 1;
}

/// Axis-aligned rectangle anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self { left, bottom, width, height }
    }

    /// Rectangle of the given size centred on (x, y)
    pub fn centered(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x - width / 2.0, y - height / 2.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    /// Inclusive point containment, used by button hit-tests
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.bottom && y <= self.top()
    }

    /// Strict overlap with the bounding box of a circle
    pub fn overlaps_circle(&self, x: f32, y: f32, radius: f32) -> bool {
        x + radius > self.left
            && x - radius < self.right()
            && y + radius > self.bottom
            && y - radius < self.top()
    }
}
