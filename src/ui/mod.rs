pub mod buttons;
pub mod canvas;
pub mod field;
pub mod palette;
pub mod screens;
pub mod viewport;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::consts::{GRID_COLS, GRID_ROWS};
use crate::game::{GameState, GameWorld};

/// Terminal regions: status bar, arena, help bar
pub struct ScreenLayout {
    pub status: Rect,
    pub arena: Rect,
    pub help: Rect,
}

fn outer_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" 🧱 PixelShatter ")
        .title_style(Style::default().fg(Color::Rgb(255, 100, 100)).add_modifier(Modifier::BOLD))
}

/// Shared by rendering and mouse mapping so both agree on where the arena is
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let inner = outer_block().inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);
    ScreenLayout {
        status: chunks[0],
        arena: chunks[1],
        help: chunks[2],
    }
}

/// Draw one frame. Reads the app, never changes it.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(outer_block(), area);
    let layout = screen_layout(area);

    frame.render_widget(Paragraph::new(status_line(&app.world)), layout.status);

    let (w, h) = (layout.arena.width, layout.arena.height);
    let lines = match app.world.state {
        GameState::Menu => screens::render_menu(w, h, app.frame),
        GameState::Playing | GameState::Paused => field::render_field(&app.world, w, h, app.frame),
        GameState::GameOver => screens::render_game_over(&app.world.session, w, h, app.frame),
        GameState::Credits => screens::render_credits(w, h, app.frame),
    };
    frame.render_widget(Paragraph::new(lines), layout.arena);

    frame.render_widget(Paragraph::new(help_line(&app.world)), layout.help);
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}

fn status_line(world: &GameWorld) -> Line<'static> {
    let session = &world.session;
    if !world.state.shows_arena() {
        return Line::from(vec![
            Span::styled(
                format!(" {} ", world.state.title()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            separator(),
            Span::styled(
                format!(
                    "Ball {} · Paddle {} · Bricks {}",
                    palette::name(session.ball_color),
                    palette::name(session.paddle_color),
                    palette::name(session.brick_color),
                ),
                Style::default().fg(Color::Gray),
            ),
        ]);
    }

    Line::from(vec![
        Span::styled(
            format!(" Score: {} ", session.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            format!("Lives: {} ", "♥ ".repeat(session.lives as usize)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            format!("Level: {} ", session.level),
            Style::default().fg(Color::Cyan),
        ),
        separator(),
        Span::styled(
            format!("Bricks: {}/{} ", world.grid.alive_count(), GRID_ROWS * GRID_COLS),
            Style::default().fg(Color::Green),
        ),
    ])
}

fn help_line(world: &GameWorld) -> Line<'static> {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let entries: &[(&str, &str)] = match world.state {
        GameState::Menu => &[("N", "New Game"), ("C", "Credits"), ("1/2/3", "Colours"), ("Q", "Quit")],
        GameState::Playing if !world.ball.launched => &[
            ("←→/Mouse", "Move"),
            ("SPACE/Click", "Launch"),
            ("P", "Pause"),
            ("Esc", "Menu"),
            ("Q", "Quit"),
        ],
        GameState::Playing => &[("←→/Mouse", "Move"), ("P", "Pause"), ("Esc", "Menu"), ("Q", "Quit")],
        GameState::Paused => &[("P", "Resume"), ("Esc", "Menu"), ("Q", "Quit")],
        GameState::GameOver => &[("R", "Restart"), ("M", "Menu"), ("Q", "Quit")],
        GameState::Credits => &[("B", "Back"), ("Q", "Quit")],
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (k, what)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))));
        }
        spans.push(Span::styled(format!("{k} "), key));
        spans.push(Span::styled(format!("{what} "), dim));
    }
    Line::from(spans)
}
