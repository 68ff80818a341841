//! TUI module for interactive system exploration.

pub mod app;
pub mod event;
pub mod ui;
pub mod widgets;

pub use app::App;

use std::io;
use std::time::Duration;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::system::{BodyId, LoadedSystem};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the interactive overview until the user quits.
pub fn run(loaded: LoadedSystem, root: Option<BodyId>, config: &Config) -> io::Result<()> {
    let mut app = App::new(loaded, config);
    if root.is_some() {
        app.root_override = root;
        app.refresh();
    }
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app, tick_rate);
    restore_terminal(&mut terminal)?;
    result
}

fn run_app(terminal: &mut Term, app: &mut App, tick_rate: Duration) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;
        if !event::handle_events(app, tick_rate)? {
            // Idle ticks redraw the widget so live distances stay current
            app.refresh();
        }
    }
    tracing::debug!("TUI loop finished");
    Ok(())
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
