use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::game::consts::PADDLE_NUDGE;
use crate::game::physics::{self, GameEvent};
use crate::game::{Action, ColorTarget, GameState, GameWorld, Outcome};
use crate::ui::buttons;
use crate::ui::viewport::Viewport;

pub struct App {
    pub should_quit: bool,
    pub world: GameWorld,
    /// Ticks since startup, drives cosmetic animation only
    pub frame: u64,
    /// Where the arena sits on the terminal, for mouse mapping
    pub viewport: Viewport,
}

impl App {
    pub fn new(world: GameWorld, screen: Rect) -> Self {
        Self {
            should_quit: false,
            world,
            frame: 0,
            viewport: Viewport::for_screen(screen),
        }
    }

    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        for event in physics::tick(&mut self.world) {
            match event {
                GameEvent::BrickDestroyed { row, col, points } => {
                    log::debug!("brick ({row}, {col}) destroyed, +{points}");
                }
                GameEvent::LevelCleared { next_level } => {
                    log::info!("grid cleared, level {next_level}");
                }
                GameEvent::LifeLost { lives_left } => {
                    log::debug!("ball missed, {lives_left} lives left");
                }
                GameEvent::GameOver { final_score } => {
                    log::info!("game over, final score {final_score}");
                }
            }
        }
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::for_screen(Rect::new(0, 0, width, height));
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.dispatch(Action::Quit);
            return;
        }

        match key.code {
            KeyCode::Left => self.world.nudge_paddle(-PADDLE_NUDGE),
            KeyCode::Right => self.world.nudge_paddle(PADDLE_NUDGE),
            code => {
                if let Some(action) = key_action(code) {
                    self.dispatch(action);
                }
            }
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some((x, _)) = self.viewport.to_arena(mouse.column, mouse.row) {
                    self.world.move_paddle_to(x);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Right) => {
                self.dispatch(Action::CycleColor(color_target(mouse.modifiers)));
            }
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        let Some((x, y)) = self.viewport.to_arena(column, row) else {
            return;
        };
        let action = match self.world.state {
            GameState::Playing => Some(Action::Launch),
            state => buttons::hit_test(state, x, y),
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn dispatch(&mut self, action: Action) {
        if self.world.apply(action) == Outcome::Quit {
            self.should_quit = true;
        }
    }
}

/// Keyboard bindings. State gating is left to the transition table.
fn key_action(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char(' ') => Action::Launch,
        KeyCode::Char('p') | KeyCode::Char('P') => Action::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Char('b') | KeyCode::Char('B') => Action::Back,
        KeyCode::Char('m') | KeyCode::Char('M') => Action::ToMenu,
        KeyCode::Char('n') | KeyCode::Char('N') => Action::NewGame,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::ShowCredits,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        KeyCode::Char('1') => Action::CycleColor(ColorTarget::Ball),
        KeyCode::Char('2') => Action::CycleColor(ColorTarget::Paddle),
        KeyCode::Char('3') => Action::CycleColor(ColorTarget::Bricks),
        KeyCode::Esc => Action::Cancel,
        _ => return None,
    };
    Some(action)
}

/// Right-click colour slot: plain for the ball, Shift for the paddle,
/// Ctrl or Alt for the bricks. Shift wins when several are held.
fn color_target(modifiers: KeyModifiers) -> ColorTarget {
    if modifiers.contains(KeyModifiers::SHIFT) {
        ColorTarget::Paddle
    } else if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        ColorTarget::Bricks
    } else {
        ColorTarget::Ball
    }
}
