use serde::Serialize;

use crate::error::Result;
use crate::format::Quantity;
use crate::system::{BodyCategory, BodyId, BodyType, Selection, SystemBody};

use super::shadow::{Badges, ShadowEntry};
use super::state::{ControlInput, OverviewState};
use super::{badge_icons, Overview, OverviewHandler, OverviewRow, RowPainter, RowResponse};

/// Painter that renders rows as an indented plain-text tree.
struct TextPainter {
    output: String,
}

impl RowPainter for TextPainter {
    fn controls(&mut self, _state: &OverviewState) -> ControlInput {
        ControlInput::default()
    }

    fn row(&mut self, row: &OverviewRow<'_>) -> RowResponse {
        let indent = "  ".repeat(row.depth);
        let badges = badge_icons(&row.badges).concat();
        let badges = if badges.is_empty() {
            badges
        } else {
            format!(" {}", badges)
        };
        let selected = if row.selected { "  [selected]" } else { "" };

        self.output.push_str(&format!(
            "{}{} {}{}  {}{}\n",
            indent, row.icon, row.label, badges, row.distance, selected
        ));
        RowResponse::None
    }
}

/// Text output has nothing to click.
struct Inert;

impl OverviewHandler for Inert {
    fn on_row_click(&mut self, _body: &SystemBody) {}
    fn on_row_context_menu(&mut self, _body: &SystemBody) {}
}

/// Render the overview as an indented text tree.
pub fn format_tree(
    overview: &Overview<'_>,
    state: &OverviewState,
    root_override: Option<BodyId>,
    selection: &Selection,
) -> String {
    let mut painter = TextPainter {
        output: String::new(),
    };
    let mut state = state.clone();
    overview.display(&mut state, root_override, selection, &mut painter, &mut Inert);
    painter.output
}

/// Serializable view of the drawn part of a shadow tree.
#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub key: String,
    pub name: String,
    pub body_type: BodyType,
    pub category: BodyCategory,
    pub selected: bool,
    pub visible: bool,
    pub children_visible: bool,
    pub badges: Badges,
    pub distance: Quantity,
    pub live_distance: bool,
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    /// Snapshot an entry and its drawn descendants; `None` if it is not drawn.
    pub fn from_entry(overview: &Overview<'_>, entry: &ShadowEntry<'_>) -> Option<Self> {
        if !entry.is_drawn() {
            return None;
        }
        let (distance, live_distance) = overview.row_distance(entry.body);
        Some(Self {
            key: entry.body.key.clone(),
            name: entry.label.clone(),
            body_type: entry.body.body_type,
            category: entry.body.category,
            selected: entry.selected,
            visible: entry.visible,
            children_visible: entry.children_visible,
            badges: entry.badges,
            distance,
            live_distance,
            children: entry
                .children
                .iter()
                .filter_map(|child| Self::from_entry(overview, child))
                .collect(),
        })
    }
}

/// Render the overview as JSON.
pub fn format_json(
    overview: &Overview<'_>,
    state: &OverviewState,
    root_override: Option<BodyId>,
    selection: &Selection,
    pretty: bool,
) -> Result<String> {
    let tree = overview.tree(state, root_override, selection);
    let snapshot = TreeSnapshot::from_entry(overview, &tree);
    let json = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Lexicon;
    use crate::system::{LoadedSystem, SelectionRef, SystemBuilder};

    fn loaded() -> LoadedSystem {
        SystemBuilder::new("Test")
            .body("sun", "Sun", BodyType::Star, None)
            .body("earth", "Earth", BodyType::RockyPlanet, Some("sun"))
            .orbit(1.47e11, 1.52e11)
            .body("moon", "Moon", BodyType::RockyPlanet, Some("earth"))
            .orbit(3.6e8, 4.0e8)
            .body("base", "Base", BodyType::SurfaceStation, Some("moon"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_format_tree_lines() {
        let loaded = loaded();
        let lex = Lexicon::default();
        let overview = Overview::new(&loaded.system, None, &lex);
        let output = format_tree(&overview, &OverviewState::default(), None, &Selection::new());

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "☼ Sun  0 m");
        assert_eq!(lines[1], "  ● Earth ○  1.00 AU");
        assert_eq!(lines[2], "    ○ Moon ▲  380.00 Mm");
        assert_eq!(lines[3], "      ▲ Base  0 m");
    }

    #[test]
    fn test_format_tree_marks_selection() {
        let loaded = loaded();
        let lex = Lexicon::default();
        let overview = Overview::new(&loaded.system, None, &lex);
        let base = loaded.system.find("base").unwrap().id;
        let selection: Selection = [SelectionRef::Body(base)].into_iter().collect();
        let state = OverviewState {
            show_stations: false,
            ..Default::default()
        };

        let output = format_tree(&overview, &state, None, &selection);
        assert!(output.contains("▲ Base  0 m  [selected]"));
    }

    #[test]
    fn test_format_json_prunes_hidden() {
        let loaded = loaded();
        let lex = Lexicon::default();
        let overview = Overview::new(&loaded.system, None, &lex);
        let state = OverviewState {
            filter: "earth".into(),
            ..Default::default()
        };

        let json = format_json(&overview, &state, None, &Selection::new(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["key"], "sun");
        assert_eq!(value["children"][0]["key"], "earth");
        assert_eq!(value["children"][0]["category"], "planet");
        assert_eq!(value["children"][0]["badges"]["has_moons"], true);
        assert!(value["children"][0]["children"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_json_empty_when_nothing_matches() {
        let loaded = loaded();
        let lex = Lexicon::default();
        let overview = Overview::new(&loaded.system, None, &lex);
        let state = OverviewState {
            filter: "pluto".into(),
            ..Default::default()
        };
        let json = format_json(&overview, &state, None, &Selection::new(), false).unwrap();
        assert_eq!(json, "null");
    }
}
