//! Terminal front end for the rewindable game.
//!
//! Each key press becomes one [`Action`], the [`App`] applies it to the
//! game history, and the screen is redrawn from a freshly derived view.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, map_key, move_cursor};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{info, instrument};

use crate::config::Settings;

/// Runs the interactive game until the user quits.
#[instrument(skip(settings))]
pub fn run(settings: Settings) -> Result<()> {
    info!("Starting interactive game");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(settings));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Interactive game closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let view = app.view();
        terminal.draw(|frame| draw(frame, &view, app.cursor(), app.settings()))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle(map_key(key.code)).is_break()
        {
            return Ok(());
        }
    }
}
