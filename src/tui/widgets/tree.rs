//! Overview list widget: indented body rows with badges and right-aligned
//! distances.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::overview::badge_icons;
use crate::tui::app::RowView;

/// Width reserved for the distance column ("1234.56 AU" plus padding).
const DISTANCE_WIDTH: usize = 12;

/// Rows of the last overview frame, drawn with the cursor highlighted.
pub struct TreeList<'a> {
    rows: &'a [RowView],
    cursor: usize,
}

impl<'a> TreeList<'a> {
    pub fn new(rows: &'a [RowView], cursor: usize) -> Self {
        Self { rows, cursor }
    }
}

impl Widget for TreeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        let offset = calculate_scroll_offset(self.cursor, height, self.rows.len());

        for (i, row) in self.rows.iter().skip(offset).take(height).enumerate() {
            let line_area = Rect::new(area.x, area.y + i as u16, area.width, 1);
            let line = row_line(row, area.width as usize, offset + i == self.cursor);
            Paragraph::new(line).render(line_area, buf);
        }
    }
}

pub fn calculate_scroll_offset(cursor: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if cursor < padding {
        0
    } else if cursor >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        cursor.saturating_sub(padding)
    }
}

/// Color of a row's label, by what kind of body it is.
fn icon_color(icon: &str) -> Color {
    match icon {
        "☼" => Color::Yellow,
        "◍" => Color::Rgb(255, 165, 0),
        "●" => Color::Blue,
        "○" => Color::Gray,
        "◇" | "▲" => Color::Cyan,
        _ => Color::White,
    }
}

/// Build one row's line, padded so the distance ends at `width`.
pub fn row_line(row: &RowView, width: usize, is_cursor: bool) -> Line<'static> {
    let indent = "  ".repeat(row.depth);
    let badges = badge_icons(&row.badges).concat();
    let marker = if row.selected { "*" } else { " " };

    let distance = format!("{:>width$}", row.distance.to_string(), width = DISTANCE_WIDTH);

    // Use chars().count() for display width, not byte length
    let prefix_len = indent.chars().count() + 1 + row.icon.chars().count() + 1;
    let badge_len = if badges.is_empty() {
        0
    } else {
        badges.chars().count() + 1
    };
    let label_width = width.saturating_sub(prefix_len + badge_len + DISTANCE_WIDTH);

    let label_len = row.label.chars().count();
    let label = if label_len > label_width && label_width > 1 {
        let truncated: String = row.label.chars().take(label_width - 1).collect();
        format!("{}…", truncated)
    } else {
        row.label.clone()
    };
    let padding = " ".repeat(label_width.saturating_sub(label.chars().count()));

    let label_style = if row.selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(icon_color(row.icon))
    };
    let distance_style = if row.live {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::raw(indent),
        Span::styled(row.icon, Style::default().fg(icon_color(row.icon))),
        Span::raw(" "),
        Span::styled(label, label_style),
    ];
    if !badges.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(badges, Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::raw(padding));
    spans.push(Span::styled(distance, distance_style));

    let mut line = Line::from(spans);
    if is_cursor {
        line = line.style(Style::default().bg(Color::DarkGray));
    }
    line
}
