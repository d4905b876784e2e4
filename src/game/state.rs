//! Screen/mode state machine.
//!
//! `transition` is a pure table from (state, action) to the next state plus a
//! side effect; `GameWorld::apply` runs the effect against the world.

use super::consts::PALETTE_SIZE;
use super::world::GameWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
    Credits,
}

impl GameState {
    pub fn title(&self) -> &'static str {
        match self {
            GameState::Menu => "Menu",
            GameState::Playing => "Playing",
            GameState::Paused => "Paused",
            GameState::GameOver => "Game Over",
            GameState::Credits => "Credits",
        }
    }

    /// Whether the arena (bricks, paddle, ball) is on screen
    pub fn shows_arena(&self) -> bool {
        matches!(self, GameState::Playing | GameState::Paused)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Ball,
    Paddle,
    Bricks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewGame,
    Restart,
    TogglePause,
    Launch,
    ShowCredits,
    /// Credits back to the menu
    Back,
    /// Game over screen to the menu
    ToMenu,
    /// Return to the menu from anywhere
    Cancel,
    Quit,
    CycleColor(ColorTarget),
}

/// Work done on the world when a transition fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    NewGame,
    Launch,
    CycleColor(ColorTarget),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: GameState,
    pub effect: Effect,
}

impl Transition {
    fn to(next: GameState) -> Self {
        Self { next, effect: Effect::None }
    }

    fn with(next: GameState, effect: Effect) -> Self {
        Self { next, effect }
    }
}

/// What the shell should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Transition table. `None` means the action does nothing in this state.
///
/// `ball_launched` guards `Launch`, which only applies to a resting ball.
pub fn transition(state: GameState, action: Action, ball_launched: bool) -> Option<Transition> {
    use GameState::*;

    match (state, action) {
        (_, Action::Quit) => Some(Transition::with(state, Effect::Exit)),
        (_, Action::Cancel) => Some(Transition::to(Menu)),
        (_, Action::CycleColor(target)) => Some(Transition::with(state, Effect::CycleColor(target))),

        (Menu, Action::NewGame) => Some(Transition::with(Playing, Effect::NewGame)),
        (Menu, Action::ShowCredits) => Some(Transition::to(Credits)),

        (Playing, Action::TogglePause) => Some(Transition::to(Paused)),
        (Paused, Action::TogglePause) => Some(Transition::to(Playing)),
        (Playing, Action::Launch) if !ball_launched => Some(Transition::with(Playing, Effect::Launch)),

        (GameOver, Action::Restart) => Some(Transition::with(Playing, Effect::NewGame)),
        (GameOver, Action::ToMenu) => Some(Transition::to(Menu)),

        (Credits, Action::Back) => Some(Transition::to(Menu)),

        _ => None,
    }
}

impl GameWorld {
    /// Run one action through the transition table
    pub fn apply(&mut self, action: Action) -> Outcome {
        let Some(t) = transition(self.state, action, self.ball.launched) else {
            log::trace!("ignored {:?} in {:?}", action, self.state);
            return Outcome::Continue;
        };

        if t.next != self.state {
            log::info!("{:?} -> {:?} on {:?}", self.state, t.next, action);
        }

        match t.effect {
            Effect::None => self.state = t.next,
            Effect::NewGame => self.start_new_game(),
            Effect::Launch => {
                self.ball.launch(self.session.level);
                log::debug!(
                    "launched at ({:.4}, {:.4}), speed {:.4}",
                    self.ball.dx,
                    self.ball.dy,
                    self.ball.speed()
                );
            }
            Effect::CycleColor(target) => {
                let slot = match target {
                    ColorTarget::Ball => &mut self.session.ball_color,
                    ColorTarget::Paddle => &mut self.session.paddle_color,
                    ColorTarget::Bricks => &mut self.session.brick_color,
                };
                *slot = (*slot + 1) % PALETTE_SIZE;
            }
            Effect::Exit => return Outcome::Quit,
        }
        Outcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::physics::tick;
    use rstest::rstest;

    #[rstest]
    #[case(GameState::Menu, Action::NewGame, Some(GameState::Playing))]
    #[case(GameState::Menu, Action::ShowCredits, Some(GameState::Credits))]
    #[case(GameState::Menu, Action::TogglePause, None)]
    #[case(GameState::Menu, Action::Restart, None)]
    #[case(GameState::Playing, Action::TogglePause, Some(GameState::Paused))]
    #[case(GameState::Paused, Action::TogglePause, Some(GameState::Playing))]
    #[case(GameState::Paused, Action::Launch, None)]
    #[case(GameState::Playing, Action::NewGame, None)]
    #[case(GameState::GameOver, Action::Restart, Some(GameState::Playing))]
    #[case(GameState::GameOver, Action::ToMenu, Some(GameState::Menu))]
    #[case(GameState::GameOver, Action::TogglePause, None)]
    #[case(GameState::Credits, Action::Back, Some(GameState::Menu))]
    #[case(GameState::Credits, Action::NewGame, None)]
    #[case(GameState::Playing, Action::Cancel, Some(GameState::Menu))]
    #[case(GameState::Paused, Action::Cancel, Some(GameState::Menu))]
    #[case(GameState::Credits, Action::Cancel, Some(GameState::Menu))]
    #[case(GameState::Menu, Action::Cancel, Some(GameState::Menu))]
    fn test_transition_table(
        #[case] from: GameState,
        #[case] action: Action,
        #[case] expected: Option<GameState>,
    ) {
        assert_eq!(transition(from, action, false).map(|t| t.next), expected);
    }

    #[test]
    fn test_launch_only_when_resting() {
        assert_eq!(
            transition(GameState::Playing, Action::Launch, false),
            Some(Transition::with(GameState::Playing, Effect::Launch))
        );
        assert_eq!(transition(GameState::Playing, Action::Launch, true), None);
    }

    #[rstest]
    #[case(GameState::Menu)]
    #[case(GameState::Playing)]
    #[case(GameState::Paused)]
    #[case(GameState::GameOver)]
    #[case(GameState::Credits)]
    fn test_quit_from_anywhere(#[case] state: GameState) {
        let mut world = GameWorld::with_seed(1);
        world.state = state;
        assert_eq!(world.apply(Action::Quit), Outcome::Quit);
        assert_eq!(world.state, state);
    }

    #[test]
    fn test_new_game_from_menu() {
        let mut world = GameWorld::with_seed(9);
        world.session.score = 50;
        world.session.lives = 0;
        world.session.level = 2;

        assert_eq!(world.apply(Action::NewGame), Outcome::Continue);

        assert_eq!(world.state, GameState::Playing);
        assert_eq!(world.session.score, 0);
        assert_eq!(world.session.lives, 3);
        assert_eq!(world.session.level, 1);
        assert!(!world.ball.launched);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut world = GameWorld::with_seed(9);
        world.apply(Action::NewGame);
        world.state = GameState::GameOver;
        world.session.lives = 0;
        world.session.score = 990;

        world.apply(Action::Restart);

        assert_eq!(world.state, GameState::Playing);
        assert_eq!(world.session.lives, 3);
        assert_eq!(world.session.score, 0);
    }

    #[test]
    fn test_pause_freezes_and_preserves_world() {
        let mut world = GameWorld::with_seed(5);
        world.apply(Action::NewGame);
        world.apply(Action::Launch);
        tick(&mut world);
        let before = (world.ball.clone(), world.session.clone(), world.grid.clone());

        world.apply(Action::TogglePause);
        assert_eq!(world.state, GameState::Paused);
        for _ in 0..10 {
            tick(&mut world);
        }
        assert_eq!((world.ball.clone(), world.session.clone(), world.grid.clone()), before);

        world.apply(Action::TogglePause);
        assert_eq!(world.state, GameState::Playing);
    }

    #[test]
    fn test_launch_uses_level() {
        let mut world = GameWorld::with_seed(5);
        world.apply(Action::NewGame);
        world.session.level = 2;
        world.apply(Action::Launch);
        assert!(world.ball.launched);
        assert!((world.ball.dx - 0.012).abs() < 1e-6);
        assert!((world.ball.dy - 0.018).abs() < 1e-6);
        assert!((world.ball.speed() - (0.012f32.powi(2) + 0.018f32.powi(2)).sqrt()).abs() < 1e-6);

        // second launch is ignored while in flight
        world.ball.dx = 0.5;
        world.apply(Action::Launch);
        assert_eq!(world.ball.dx, 0.5);
    }

    #[test]
    fn test_cycle_color_wraps_and_keeps_state() {
        let mut world = GameWorld::with_seed(5);
        world.session.brick_color = PALETTE_SIZE - 1;
        world.apply(Action::CycleColor(ColorTarget::Bricks));
        world.apply(Action::CycleColor(ColorTarget::Ball));
        assert_eq!(world.session.brick_color, 0);
        assert_eq!(world.session.ball_color, 1);
        assert_eq!(world.state, GameState::Menu);
    }

    #[test]
    fn test_menu_credits_round_trip() {
        let mut world = GameWorld::with_seed(5);
        world.apply(Action::ShowCredits);
        assert_eq!(world.state, GameState::Credits);
        world.apply(Action::Back);
        assert_eq!(world.state, GameState::Menu);
    }
}
