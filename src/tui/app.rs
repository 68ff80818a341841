//! Application state for the TUI.

use std::mem;

use crate::config::{Config, FormatConfig};
use crate::format::{Key, Lexicon, Quantity};
use crate::overview::{
    Badges, ControlInput, Overview, OverviewHandler, OverviewRow, OverviewState, RowPainter,
    RowResponse, SortMode,
};
use crate::system::{BodyId, LoadedSystem, Selection, SelectionRef, Space, StarSystem, SystemBody};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Editing the filter text.
    Search,
    /// Context menu for one body.
    ContextMenu,
    /// Help overlay mode.
    Help,
}

/// Entries of the row context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Make the body the only selection.
    Select,
    /// Start the tree at the body.
    Focus,
    /// Start the tree at the system root again.
    ResetFocus,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::Select, MenuAction::Focus, MenuAction::ResetFocus];

    pub fn label_key(self) -> Key {
        match self {
            MenuAction::Select => Key::MenuSelect,
            MenuAction::Focus => Key::MenuFocus,
            MenuAction::ResetFocus => Key::MenuResetFocus,
        }
    }
}

/// One drawn row of the last frame.
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: BodyId,
    pub depth: usize,
    pub icon: &'static str,
    pub label: String,
    pub selected: bool,
    pub badges: Badges,
    pub distance: Quantity,
    /// `distance` is measured from the player
    pub live: bool,
}

/// Painter for one TUI frame: records rows and replays queued input.
struct FramePainter {
    controls: ControlInput,
    click: Option<(BodyId, RowResponse)>,
    rows: Vec<RowView>,
}

impl RowPainter for FramePainter {
    fn controls(&mut self, _state: &OverviewState) -> ControlInput {
        mem::take(&mut self.controls)
    }

    fn row(&mut self, row: &OverviewRow<'_>) -> RowResponse {
        self.rows.push(RowView {
            id: row.body.id,
            depth: row.depth,
            icon: row.icon,
            label: row.label.to_string(),
            selected: row.selected,
            badges: row.badges,
            distance: row.distance.clone(),
            live: row.live,
        });
        match self.click {
            Some((id, response)) if id == row.body.id => response,
            _ => RowResponse::None,
        }
    }
}

/// Row callbacks raised during a frame, applied once the frame is done.
#[derive(Debug, Default)]
struct FrameEvents {
    clicked: Option<BodyId>,
    context_menu: Option<BodyId>,
}

impl OverviewHandler for FrameEvents {
    fn on_row_click(&mut self, body: &SystemBody) {
        self.clicked = Some(body.id);
    }

    fn on_row_context_menu(&mut self, body: &SystemBody) {
        self.context_menu = Some(body.id);
    }
}

/// Main application state for the TUI.
pub struct App {
    /// Body hierarchy being explored.
    pub system: StarSystem,

    /// Live state, when the player is in a system.
    pub space: Option<Space>,

    /// String table for every label.
    pub lexicon: Lexicon,

    /// Number formatting settings.
    pub format: FormatConfig,

    /// Overview widget state.
    pub state: OverviewState,

    /// Currently selected bodies.
    pub selection: Selection,

    /// Tree root, when focused on a body other than the system root.
    pub root_override: Option<BodyId>,

    /// Rows drawn in the last frame.
    pub rows: Vec<RowView>,

    /// Cursor index in `rows`.
    pub cursor: usize,

    /// Current UI mode.
    pub mode: Mode,

    /// Filter text being edited in search mode.
    pub filter_input: String,

    /// Body the context menu was opened on.
    pub menu_target: Option<BodyId>,

    /// Highlighted context menu entry.
    pub menu_cursor: usize,

    /// Whether to show the details panel.
    pub show_details: bool,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    pending_controls: ControlInput,
    pending_click: Option<(BodyId, RowResponse)>,
}

impl App {
    /// Create a new App instance and draw the first frame.
    pub fn new(loaded: LoadedSystem, config: &Config) -> Self {
        let state = config.overview.initial_state();
        let mut app = Self {
            system: loaded.system,
            space: loaded.space,
            lexicon: config.strings.clone(),
            format: config.format.clone(),
            filter_input: state.filter.clone(),
            state,
            selection: Selection::new(),
            root_override: None,
            rows: Vec::new(),
            cursor: 0,
            mode: Mode::Normal,
            menu_target: None,
            menu_cursor: 0,
            show_details: config.tui.details_panel,
            should_quit: false,
            status_message: None,
            pending_controls: ControlInput::default(),
            pending_click: None,
        };
        app.refresh();
        app
    }

    pub fn overview(&self) -> Overview<'_> {
        Overview::new(&self.system, self.space.as_ref(), &self.lexicon)
    }

    /// Body under the cursor, if any.
    pub fn cursor_body(&self) -> Option<&SystemBody> {
        self.rows.get(self.cursor).map(|row| self.system.body(row.id))
    }

    /// Get the row under the cursor, if any.
    pub fn cursor_row(&self) -> Option<&RowView> {
        self.rows.get(self.cursor)
    }

    /// Queue control input for the next frame and draw it.
    pub fn control(&mut self, input: ControlInput) {
        self.pending_controls = input;
        self.refresh();
    }

    /// Click the row under the cursor.
    pub fn click_cursor(&mut self) {
        self.respond_at_cursor(RowResponse::Clicked);
    }

    /// Right-click the row under the cursor.
    pub fn context_menu_at_cursor(&mut self) {
        self.respond_at_cursor(RowResponse::ContextMenu);
    }

    fn respond_at_cursor(&mut self, response: RowResponse) {
        if let Some(id) = self.cursor_row().map(|row| row.id) {
            self.pending_click = Some((id, response));
            self.refresh();
        }
    }

    /// Draw one overview frame, then apply the callbacks it raised.
    pub fn refresh(&mut self) {
        let events = self.frame();

        let mut changed = false;
        if let Some(id) = events.clicked {
            self.toggle_selection(id);
            changed = true;
        }
        if let Some(id) = events.context_menu {
            self.open_menu(id);
        }

        // Selection changes are only visible in the next frame
        if changed {
            self.frame();
        }
    }

    fn frame(&mut self) -> FrameEvents {
        let cursor_id = self.cursor_row().map(|row| row.id);
        let mut painter = FramePainter {
            controls: mem::take(&mut self.pending_controls),
            click: self.pending_click.take(),
            rows: Vec::with_capacity(self.rows.len()),
        };
        let mut events = FrameEvents::default();

        let overview = Overview::new(&self.system, self.space.as_ref(), &self.lexicon);
        overview.display(
            &mut self.state,
            self.root_override,
            &self.selection,
            &mut painter,
            &mut events,
        );

        self.rows = painter.rows;
        self.cursor = cursor_id
            .and_then(|id| self.rows.iter().position(|row| row.id == id))
            .unwrap_or_else(|| self.cursor.min(self.rows.len().saturating_sub(1)));
        events
    }

    /// Make `id` the only selection, or clear it if it already is.
    fn toggle_selection(&mut self, id: BodyId) {
        let name = self.system.body(id).name.clone();
        if self.selection.len() == 1 && self.selection.targets(id, self.space.as_ref()) {
            self.selection.clear();
            self.status_message = Some(format!("Deselected {}", name));
        } else {
            self.select_only(id);
        }
    }

    fn select_only(&mut self, id: BodyId) {
        let item = self.selection_ref(id);
        self.selection.clear();
        self.selection.insert(item);
        self.status_message = Some(format!("Selected {}", self.system.body(id).name));
        tracing::debug!(body = %self.system.body(id).key, "Selection changed");
    }

    /// The live object standing for a body if there is one, else the body.
    fn selection_ref(&self, id: BodyId) -> SelectionRef {
        self.space
            .as_ref()
            .filter(|space| space.is_current(self.system.name()))
            .and_then(|space| space.live_for(id))
            .map(|live| SelectionRef::Live(live.id))
            .unwrap_or(SelectionRef::Body(id))
    }

    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.status_message = Some("Selection cleared".to_string());
            self.refresh();
        }
    }

    fn open_menu(&mut self, id: BodyId) {
        self.menu_target = Some(id);
        self.menu_cursor = 0;
        self.mode = Mode::ContextMenu;
    }

    pub fn close_menu(&mut self) {
        self.menu_target = None;
        self.mode = Mode::Normal;
    }

    /// Move the context menu highlight by delta, clamped to the entries.
    pub fn move_menu(&mut self, delta: isize) {
        let last = MenuAction::ALL.len() as isize - 1;
        self.menu_cursor = (self.menu_cursor as isize + delta).clamp(0, last) as usize;
    }

    /// Run the highlighted context menu entry and close the menu.
    pub fn activate_menu(&mut self) {
        let Some(id) = self.menu_target else {
            self.close_menu();
            return;
        };

        match MenuAction::ALL[self.menu_cursor] {
            MenuAction::Select => self.select_only(id),
            MenuAction::Focus => {
                self.root_override = Some(id);
                self.status_message = Some(format!("Focused on {}", self.system.body(id).name));
            }
            MenuAction::ResetFocus => {
                self.root_override = None;
                self.status_message = Some(format!("Focused on {}", self.system.name()));
            }
        }
        self.close_menu();
        self.refresh();
    }

    /// Move the cursor by delta rows, clamped to the drawn rows.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.rows.len() as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Start editing the filter.
    pub fn begin_search(&mut self) {
        self.filter_input = self.state.filter.clone();
        self.mode = Mode::Search;
    }

    /// Push the edited filter text into the widget.
    pub fn update_filter(&mut self) {
        self.control(ControlInput {
            filter: Some(self.filter_input.clone()),
            ..Default::default()
        });
    }

    /// Drop the filter and leave search mode.
    pub fn cancel_search(&mut self) {
        self.filter_input.clear();
        self.mode = Mode::Normal;
        self.update_filter();
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    /// Short label for a widget toggle, e.g. `Moons ✓`.
    pub fn toggle_label(&self, key: Key, on: bool) -> String {
        format!("{} {}", self.lexicon.get(key), if on { "✓" } else { "✗" })
    }

    pub fn sort_label(&self) -> &str {
        match self.state.sort_mode {
            SortMode::Distance => self.lexicon.get(Key::SortByDistance),
            SortMode::Orbit => self.lexicon.get(Key::SortByOrbit),
        }
    }
}
