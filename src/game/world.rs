use rand::rngs::StdRng;
use rand::SeedableRng;

use super::consts::*;
use super::grid::Grid;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub launched: bool,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: Self::rest_y(),
            dx: 0.0,
            dy: 0.0,
            radius: BALL_RADIUS,
            launched: false,
        }
    }

    /// Height at which the ball sits on top of the paddle
    pub fn rest_y() -> f32 {
        PADDLE_TOP + BALL_RADIUS
    }

    /// Put the ball back on the paddle and wait for a launch
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.follow(paddle);
        self.dx = 0.0;
        self.dy = 0.0;
        self.launched = false;
    }

    /// Track the paddle while resting on it
    pub fn follow(&mut self, paddle: &Paddle) {
        self.x = paddle.x;
        self.y = Self::rest_y();
    }

    pub fn launch(&mut self, level: u32) {
        self.launched = true;
        self.dx = LAUNCH_BASE_DX + level as f32 * LAUNCH_STEP_DX;
        self.dy = LAUNCH_BASE_DY + level as f32 * LAUNCH_STEP_DY;
    }

    pub fn speed(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Centre of the paddle
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn top(&self) -> f32 {
        PADDLE_BOTTOM + self.height
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Move the centre to `x`, keeping the whole span inside the arena
    pub fn move_to(&mut self, x: f32) {
        let half = self.width / 2.0;
        self.x = x.clamp(ARENA_MIN + half, ARENA_MAX - half);
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub ball_color: usize,
    pub paddle_color: usize,
    pub brick_color: usize,
}

impl Session {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            ball_color: DEFAULT_BALL_COLOR,
            paddle_color: DEFAULT_PADDLE_COLOR,
            brick_color: DEFAULT_BRICK_COLOR,
        }
    }

    /// Start-of-game values. Colour choices survive.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
    }

    pub fn brick_points(&self) -> u32 {
        POINTS_PER_BRICK * self.level
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the simulation owns. Physics and the state machine borrow it
/// mutably; rendering only reads it.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub state: GameState,
    pub session: Session,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: Grid,
    pub(super) rng: StdRng,
}

impl GameWorld {
    /// World seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic world, used for tests and `PIXELSHATTER_SEED`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut world = Self {
            state: GameState::Menu,
            session: Session::new(),
            ball: Ball::new(),
            paddle: Paddle::new(),
            grid: Grid::empty(),
            rng,
        };
        world.grid.seed(&mut world.rng);
        world
    }

    /// Full reset for a fresh game: session, grid, paddle and ball
    pub fn start_new_game(&mut self) {
        self.session.reset();
        self.paddle = Paddle::new();
        self.ball.rest_on(&self.paddle);
        self.grid.seed(&mut self.rng);
        self.state = GameState::Playing;
    }

    pub fn reseed_grid(&mut self) {
        self.grid.seed(&mut self.rng);
    }

    /// Pointer steering. Ignored outside of Playing.
    pub fn move_paddle_to(&mut self, x: f32) {
        if self.state != GameState::Playing {
            return;
        }
        self.paddle.move_to(x);
        if !self.ball.launched {
            self.ball.follow(&self.paddle);
        }
    }

    pub fn nudge_paddle(&mut self, dx: f32) {
        self.move_paddle_to(self.paddle.x + dx);
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new()
    }
}
