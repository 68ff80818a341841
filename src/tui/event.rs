//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::overview::ControlInput;

use super::app::{App, Mode};

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                handle_key_event(app, key);
            }
            return Ok(true);
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Mode-specific handling
    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
        Mode::ContextMenu => handle_menu_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_cursor(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_cursor(1);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor_to_end();
        }
        KeyCode::PageUp => {
            app.move_cursor(-20);
        }
        KeyCode::PageDown => {
            app.move_cursor(20);
        }

        // Row interaction
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.click_cursor();
        }
        KeyCode::Char('c') => {
            app.context_menu_at_cursor();
        }
        KeyCode::Char('x') => {
            app.clear_selection();
        }

        // Widget controls
        KeyCode::Char('m') => app.control(ControlInput {
            toggle_moons: true,
            ..Default::default()
        }),
        KeyCode::Char('t') => app.control(ControlInput {
            toggle_stations: true,
            ..Default::default()
        }),
        KeyCode::Char('o') => app.control(ControlInput {
            cycle_sort: true,
            ..Default::default()
        }),
        KeyCode::Char('/') => {
            app.begin_search();
        }

        // View
        KeyCode::Char('d') => {
            app.toggle_details();
        }
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_search();
        }
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            // Keep filter active
        }
        KeyCode::Backspace => {
            app.filter_input.pop();
            app.update_filter();
        }
        KeyCode::Char(c) => {
            app.filter_input.push(c);
            app.update_filter();
        }
        _ => {}
    }
}

fn handle_menu_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_menu(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_menu(1),
        KeyCode::Enter => app.activate_menu(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => app.close_menu(),
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}
