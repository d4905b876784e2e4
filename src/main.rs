mod app;
mod config;
mod event;
mod game;
mod logging;
mod ui;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use app::App;
use config::Config;
use event::{Event, EventHandler};
use game::GameWorld;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let config = Config::parse();
    if let Some(path) = &config.log_file {
        logging::init_logging(path)?;
    }
    log::info!("starting with {:?}", config);

    let world = match config.seed {
        Some(seed) => GameWorld::with_seed(seed),
        None => GameWorld::new(),
    };

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, world, &config);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("exited with error: {e:#}");
    }
    result
}

/// Raw mode, alternate screen and mouse capture. If any step after raw mode
/// fails, the terminal is put back before the error is returned.
fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("failed to enable raw mode")?;
    undo_on_err(enter_screen(), restore_terminal)
}

fn enter_screen() -> Result<Term> {
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Run `undo` when `result` is an error. The original error is returned
/// even if `undo` fails too.
fn undo_on_err<T>(result: Result<T>, undo: impl FnOnce() -> Result<()>) -> Result<T> {
    if let Err(e) = &result {
        log::error!("terminal setup failed: {e:#}");
        if let Err(undo_err) = undo() {
            log::warn!("could not restore terminal: {undo_err:#}");
        }
    }
    result
}

fn run(terminal: &mut Term, world: GameWorld, config: &Config) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(world, Rect::new(0, 0, size.width, size.height));
    let event_handler = EventHandler::new(config.tick_rate());

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize(w, h) => app.on_resize(w, h),
        }

        if app.should_quit {
            log::info!("quit requested");
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_setup_failure_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = undo_on_err(Err(anyhow!("no tty")), || {
            restored.set(true);
            Ok(())
        });
        assert!(restored.get());
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn test_setup_success_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = undo_on_err(Ok(7), || {
            restored.set(true);
            Ok(())
        });
        assert!(!restored.get());
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_failed_restore_keeps_setup_error() {
        let result: Result<()> = undo_on_err(Err(anyhow!("no tty")), || Err(anyhow!("still raw")));
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }
}
