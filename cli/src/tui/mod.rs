pub mod app;
pub mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tasklist_core::Labels;
use tracing::info;

use crate::config::Config;
use crate::tui::app::App;

pub fn run(config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Could not enable raw mode")?;
    let mut terminal = restore_on_error(enter_alternate_screen, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut app = App::new(Labels::for_locale(config.locale));
    app.seed(&config.seed_tasks);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal before reporting anything from the loop
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let view = app.view();
    info!(
        total = view.total_count,
        completed = view.completed_count,
        "session closed"
    );
    res
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Runs `setup`, calling `restore` before handing back any error it returned.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    let res = setup();
    if res.is_err() {
        restore();
    }
    res
}

/// Blocks on terminal events and redraws only after something changed.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal
                .draw(|f| ui::draw(f, app))
                .map_err(|e| io::Error::other(e.to_string()))?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Resize(_, _) => app.mark_dirty(),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
