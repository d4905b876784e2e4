//! On-screen buttons and their per-screen hit-test tables.

use crate::game::{Action, Bounds, GameState};

pub struct Button {
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub action: Action,
}

impl Button {
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.x, self.y, self.width, self.height)
    }
}

const MENU: [Button; 3] = [
    Button { label: "NEW GAME", x: 0.0, y: 0.2, width: 0.4, height: 0.15, action: Action::NewGame },
    Button { label: "CREDITS", x: 0.0, y: -0.1, width: 0.4, height: 0.15, action: Action::ShowCredits },
    Button { label: "QUIT (Q)", x: 0.0, y: -0.4, width: 0.4, height: 0.15, action: Action::Quit },
];

const GAME_OVER: [Button; 2] = [
    Button { label: "RESTART", x: 0.0, y: -0.3, width: 0.4, height: 0.12, action: Action::Restart },
    Button { label: "MENU", x: 0.0, y: -0.5, width: 0.4, height: 0.12, action: Action::ToMenu },
];

const CREDITS: [Button; 1] = [
    Button { label: "BACK (B)", x: 0.0, y: -0.4, width: 0.4, height: 0.12, action: Action::Back },
];

pub fn buttons(state: GameState) -> &'static [Button] {
    match state {
        GameState::Menu => &MENU,
        GameState::GameOver => &GAME_OVER,
        GameState::Credits => &CREDITS,
        GameState::Playing | GameState::Paused => &[],
    }
}

/// Action of the button under an arena point, if any
pub fn hit_test(state: GameState, x: f32, y: f32) -> Option<Action> {
    buttons(state)
        .iter()
        .find(|b| b.bounds().contains(x, y))
        .map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GameState::Menu, 0.0, 0.2, Some(Action::NewGame))]
    #[case(GameState::Menu, 0.19, 0.27, Some(Action::NewGame))]
    #[case(GameState::Menu, 0.0, -0.1, Some(Action::ShowCredits))]
    #[case(GameState::Menu, 0.19, -0.4, Some(Action::Quit))]
    #[case(GameState::Menu, 0.25, -0.4, None)]
    #[case(GameState::Menu, -0.28, -0.4, None)]
    #[case(GameState::Menu, 0.0, 0.05, None)]
    #[case(GameState::GameOver, 0.1, -0.3, Some(Action::Restart))]
    #[case(GameState::GameOver, -0.1, -0.52, Some(Action::ToMenu))]
    #[case(GameState::Credits, 0.0, -0.4, Some(Action::Back))]
    #[case(GameState::Credits, 0.0, 0.2, None)]
    #[case(GameState::Playing, 0.0, 0.2, None)]
    fn test_hit_test(#[case] state: GameState, #[case] x: f32, #[case] y: f32, #[case] expected: Option<Action>) {
        assert_eq!(hit_test(state, x, y), expected);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        for state in [GameState::Menu, GameState::GameOver, GameState::Credits] {
            let list = buttons(state);
            for (i, a) in list.iter().enumerate() {
                for b in &list[i + 1..] {
                    let (a, b) = (a.bounds(), b.bounds());
                    assert!(a.bottom >= b.top() || b.bottom >= a.top());
                }
            }
        }
    }
}
