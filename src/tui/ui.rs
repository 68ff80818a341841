//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::format::{self, Key};
use crate::system::SystemBody;

use super::app::{App, MenuAction, Mode};
use super::widgets::{FancyText, Font, TreeList};

/// Width of the details panel, borders included.
const DETAILS_WIDTH: u16 = 38;

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(1), // Widget controls
            Constraint::Min(1),    // Overview
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_controls(app, frame, chunks[1]);

    let show_details = app.show_details && chunks[2].width >= DETAILS_WIDTH * 2;
    if show_details {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(DETAILS_WIDTH)])
            .split(chunks[2]);
        render_tree_area(app, frame, columns[0]);
        render_details(app, frame, columns[1]);
    } else {
        render_tree_area(app, frame, chunks[2]);
    }

    render_footer(app, frame, chunks[3]);

    // Render overlays based on mode
    match app.mode {
        Mode::Search => render_search_overlay(app, frame),
        Mode::ContextMenu => render_context_menu(app, frame),
        Mode::Help => render_help_overlay(frame),
        Mode::Normal => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let lex = &app.lexicon;
    let overview = app.overview();
    let (presence, presence_color, distances) = if overview.is_player_system() {
        (
            lex.get(Key::PlayerPresent),
            Color::Green,
            lex.get(Key::LiveDistances),
        )
    } else {
        (
            lex.get(Key::RemoteView),
            Color::DarkGray,
            lex.get(Key::OrbitalDistances),
        )
    };

    let focus = app
        .root_override
        .map(|id| app.system.body(id).name.as_str())
        .unwrap_or("");
    let focus_sep = if focus.is_empty() { "" } else { " › " };

    let texts = [
        lex.get(Key::System),
        " ",
        app.system.name(),
        focus_sep,
        focus,
        "  ",
        presence,
    ];
    let fonts = [
        Font::Dim,
        Font::Regular,
        Font::Bold,
        Font::Regular,
        Font::Italic,
        Font::Regular,
        Font::Italic,
    ];
    let colors = [
        Color::Gray,
        Color::Gray,
        Color::Cyan,
        Color::DarkGray,
        Color::White,
        Color::Gray,
        presence_color,
    ];
    let tooltips = ["", "", "", "", "", "", distances];
    let fancy = FancyText::new(&texts, &fonts, &colors).tooltips(&tooltips);

    let block = Block::default()
        .title(" Orrery ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint = Line::from(fancy.tooltip_texts().join(" · ")).style(Style::default().fg(Color::DarkGray));
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(fancy, lines[0]);
    frame.render_widget(Paragraph::new(hint), lines[1]);
}

fn render_controls(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let filter = if app.state.filter.is_empty() {
        "-".to_string()
    } else {
        app.state.filter.clone()
    };

    let line = Line::from(vec![
        Span::styled(" [m] ", key_style),
        Span::styled(app.toggle_label(Key::ShowMoons, app.state.show_moons), text_style),
        Span::styled("  [t] ", key_style),
        Span::styled(
            app.toggle_label(Key::ShowStations, app.state.show_stations),
            text_style,
        ),
        Span::styled("  [o] ", key_style),
        Span::styled(app.sort_label().to_string(), text_style),
        Span::styled("  [/] ", key_style),
        Span::styled(format!("{}: {}", app.lexicon.get(Key::Filter), filter), text_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.rows.is_empty() {
        let paragraph = Paragraph::new(app.lexicon.get(Key::NoMatches))
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(TreeList::new(&app.rows, app.cursor), inner_area);
}

/// Label/value lines describing one body.
pub fn detail_lines(app: &App, body: &SystemBody) -> Vec<(String, String)> {
    let lex = &app.lexicon;
    let mut lines = vec![
        ("Type".to_string(), body.body_type.label().to_string()),
    ];

    if let Some(parent) = body.parent {
        lines.push(("Orbits".to_string(), app.system.body(parent).name.clone()));
    }
    if let Some(kg) = body.mass {
        lines.push(("Mass".to_string(), format::mass(kg, lex).to_string()));
    }
    if let Some(radius) = body.radius {
        lines.push((
            "Radius".to_string(),
            format::distance(radius, true, lex).to_string(),
        ));
    }
    if body.apoapsis > 0.0 {
        lines.push((
            "Periapsis".to_string(),
            format::distance(body.periapsis, false, lex).to_string(),
        ));
        lines.push((
            "Apoapsis".to_string(),
            format::distance(body.apoapsis, false, lex).to_string(),
        ));
    }
    if let Some(period) = body.orbital_period {
        lines.push((
            "Period".to_string(),
            format::duration(period, app.format.duration_elements, lex),
        ));
    }
    if let Some(latitude) = body.latitude {
        lines.push(("Latitude".to_string(), format::latitude(latitude, lex)));
    }
    if let Some(longitude) = body.longitude {
        lines.push(("Longitude".to_string(), format::longitude(longitude, lex)));
    }
    if let Some(population) = body.population {
        lines.push((
            "Population".to_string(),
            format::abbreviate(population, app.format.abbreviation_places, lex),
        ));
    }

    let space = app.overview().live_space();
    if let Some(live) = space.and_then(|s| s.live_for(body.id)) {
        let distance = space.map(|s| s.distance_to_player(live)).unwrap_or_default();
        lines.push((
            "Distance".to_string(),
            format::distance(distance, true, lex).to_string(),
        ));
        lines.push((
            "Speed".to_string(),
            format::speed(live.speed(), lex).to_string(),
        ));
    }

    let badges = app
        .cursor_row()
        .filter(|row| row.id == body.id)
        .map(|row| row.badges)
        .unwrap_or_default();
    for (on, key) in [
        (badges.has_moons, Key::HasMoons),
        (badges.has_ground_stations, Key::HasGroundStations),
        (badges.has_space_stations, Key::HasSpaceStations),
    ] {
        if on {
            lines.push((String::new(), lex.get(key).to_string()));
        }
    }

    lines
}

fn render_details(app: &App, frame: &mut Frame, area: Rect) {
    let Some(body) = app.cursor_body() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        frame.render_widget(block, area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", body.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);
    let lines: Vec<Line> = detail_lines(app, body)
        .into_iter()
        .map(|(label, value)| {
            if label.is_empty() {
                Line::from(Span::styled(value, Style::default().fg(Color::Cyan)))
            } else {
                Line::from(vec![
                    Span::styled(format!("{:<11}", label), label_style),
                    Span::styled(value, value_style),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => {
            "[↑↓] Navigate  [Enter] Select  [c] Menu  [m/t/o] Toggle  [/] Filter  [?] Help  [q] Quit"
        }
        Mode::Search => "[Enter] Confirm  [Esc] Clear",
        Mode::ContextMenu => "[↑↓] Choose  [Enter] Apply  [Esc] Close",
        Mode::Help => "[Esc] Close",
    };

    // Show status message if present, otherwise hints
    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_search_overlay(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Position at bottom, above footer
    let search_area = Rect {
        x: 2,
        y: area.height.saturating_sub(5),
        width: area.width.saturating_sub(4).min(60),
        height: 3,
    };

    // Clear background
    frame.render_widget(Clear, search_area);

    let block = Block::default()
        .title(format!(" {} ", app.lexicon.get(Key::Filter)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let input = format!("/{}", app.filter_input);

    let paragraph = Paragraph::new(input)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, search_area);

    // Show cursor position
    frame.set_cursor_position(Position::new(
        search_area.x + app.filter_input.chars().count() as u16 + 2, // +2 for border and /
        search_area.y + 1,
    ));
}

fn render_context_menu(app: &App, frame: &mut Frame) {
    let Some(target) = app.menu_target else {
        return;
    };
    let area = frame.area();

    let menu_width = 30u16.min(area.width.saturating_sub(4));
    let menu_height = MenuAction::ALL.len() as u16 + 2;
    let menu_area = Rect {
        x: (area.width.saturating_sub(menu_width)) / 2,
        y: (area.height.saturating_sub(menu_height)) / 2,
        width: menu_width,
        height: menu_height,
    };

    frame.render_widget(Clear, menu_area);

    let lines: Vec<Line> = MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let text = format!(" {}", app.lexicon.get(action.label_key()));
            if i == app.menu_cursor {
                Line::from(text).style(Style::default().fg(Color::Black).bg(Color::Yellow))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", app.system.body(target).name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, menu_area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Near full-screen overlay
    let help_width = 60u16.min(area.width.saturating_sub(8));
    let help_height = 24u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k        Move up
 ↓/j        Move down
 g / G      Go to top / bottom
 PgUp/PgDn  Move a page

 BODIES
 ─────────────────────────────────
 Enter      Select / deselect body
 c          Context menu (focus, select)
 x          Clear selection

 VIEW
 ─────────────────────────────────
 /          Filter by name
 m          Toggle moons
 t          Toggle stations
 o          Cycle sort order
 d          Toggle details panel
 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
