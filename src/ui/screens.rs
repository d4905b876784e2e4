use ratatui::prelude::*;

use crate::game::{GameState, Session};
use crate::ui::buttons::{buttons, Button};
use crate::ui::canvas::Canvas;
use crate::ui::palette;

const TITLE: &str = "P I X E L S H A T T E R";

const CONTROLS: [&str; 5] = [
    "Keyboard Shortcuts:",
    "N = New Game, C = Credits, Q = Quit",
    "Mouse = Move Paddle, Space = Launch Ball, P = Pause",
    "Left Click = Launch Ball, 1 2 3 = Ball/Paddle/Brick Colours",
    "Right Click = Ball, Shift+Right = Paddle, Ctrl+Right = Bricks",
];

fn draw_button(canvas: &mut Canvas, button: &Button) {
    let fill = Style::default()
        .fg(Color::Rgb(153, 204, 255))
        .bg(Color::Rgb(51, 51, 102));
    canvas.fill(&button.bounds(), fill, |first, last| {
        if first || last {
            '┃'
        } else {
            ' '
        }
    });
    let label = Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(51, 51, 102))
        .add_modifier(Modifier::BOLD);
    canvas.text_centered(button.y, button.label, label);
}

fn draw_buttons(canvas: &mut Canvas, state: GameState) {
    for button in buttons(state) {
        draw_button(canvas, button);
    }
}

pub fn render_menu(width: u16, height: u16, frame: u64) -> Vec<Line<'static>> {
    let mut canvas = Canvas::new(width, height, frame);

    let bob = 0.1 * (frame as f32 * 0.02).sin();
    canvas.text_centered(
        0.6 + bob,
        TITLE,
        Style::default().fg(palette::title(frame)).add_modifier(Modifier::BOLD),
    );

    draw_buttons(&mut canvas, GameState::Menu);

    let help = Style::default().fg(Color::Rgb(204, 204, 204));
    for (i, line) in CONTROLS.iter().enumerate() {
        canvas.text_centered(-0.6 - i as f32 * 0.08, line, help);
    }

    canvas.into_lines()
}

pub fn render_game_over(session: &Session, width: u16, height: u16, frame: u64) -> Vec<Line<'static>> {
    let mut canvas = Canvas::new(width, height, frame);
    canvas.text_centered(
        0.2,
        "GAME OVER!",
        Style::default().fg(Color::Rgb(255, 51, 51)).add_modifier(Modifier::BOLD),
    );
    canvas.text_centered(
        0.0,
        &format!("Final Score: {}   Level: {}", session.score, session.level),
        Style::default().fg(Color::White),
    );
    draw_buttons(&mut canvas, GameState::GameOver);
    canvas.into_lines()
}

pub fn render_credits(width: u16, height: u16, frame: u64) -> Vec<Line<'static>> {
    let mut canvas = Canvas::new(width, height, frame);
    let heading = Style::default()
        .fg(Color::Rgb(204, 230, 255))
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::Rgb(204, 230, 255));
    canvas.text_centered(0.5, "PIXELSHATTER", heading);
    canvas.text_centered(0.3, "A terminal brick breaker", body);
    canvas.text_centered(0.2, "Built with ratatui and crossterm", body);
    draw_buttons(&mut canvas, GameState::Credits);
    canvas.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_menu_has_buttons_and_title() {
        let text = text_of(&render_menu(100, 40, 0));
        assert!(text.contains(TITLE));
        assert!(text.contains("NEW GAME"));
        assert!(text.contains("CREDITS"));
        assert!(text.contains("N = New Game"));
    }

    #[test]
    fn test_game_over_shows_score() {
        let session = Session {
            score: 1230,
            level: 4,
            ..Session::new()
        };
        let text = text_of(&render_game_over(&session, 100, 40, 0));
        assert!(text.contains("Final Score: 1230"));
        assert!(text.contains("RESTART"));
    }

    #[test]
    fn test_credits_back_button() {
        let text = text_of(&render_credits(100, 40, 7));
        assert!(text.contains("BACK (B)"));
    }
}
