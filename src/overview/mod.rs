//! The system-overview widget.
//!
//! Each call to [`Overview::display`] is one frame: the widget draws its
//! controls, folds their input into the [`OverviewState`], rebuilds the
//! shadow tree from the live hierarchy, sorts it and walks it depth-first,
//! emitting one row per drawn body through a [`RowPainter`]. Row clicks are
//! forwarded to the embedding view's [`OverviewHandler`].

mod filter;
mod shadow;
mod sort;
mod state;
mod text;

pub use filter::BodyFilter;
pub use shadow::{annotate, Badges, ShadowEntry};
pub use sort::{compare, sort_tree};
pub use state::{ControlInput, OverviewState, SortMode};
pub use text::{format_json, format_tree, TreeSnapshot};

use crate::format::{self, Lexicon, Quantity};
use crate::system::{BodyCategory, BodyId, BodyType, Selection, Space, StarSystem, SystemBody};

/// One row handed to the painter.
#[derive(Debug, Clone)]
pub struct OverviewRow<'a> {
    pub body: &'a SystemBody,
    pub depth: usize,
    pub icon: &'static str,
    pub label: &'a str,
    pub selected: bool,
    pub badges: Badges,
    pub distance: Quantity,
    /// `distance` is the live distance to the player
    pub live: bool,
}

/// Interaction reported by the painter for a row this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowResponse {
    #[default]
    None,
    Clicked,
    ContextMenu,
}

/// Immediate-mode drawing primitives the widget renders through.
pub trait RowPainter {
    /// Draw the widget's controls and report what was used this frame.
    fn controls(&mut self, state: &OverviewState) -> ControlInput;

    /// Draw one row.
    fn row(&mut self, row: &OverviewRow<'_>) -> RowResponse;
}

/// Callbacks the embedding view provides.
pub trait OverviewHandler {
    fn on_row_click(&mut self, body: &SystemBody);
    fn on_row_context_menu(&mut self, body: &SystemBody);
}

/// Display context for one star system.
#[derive(Debug, Clone, Copy)]
pub struct Overview<'a> {
    system: &'a StarSystem,
    space: Option<&'a Space>,
    lexicon: &'a Lexicon,
}

impl<'a> Overview<'a> {
    pub fn new(system: &'a StarSystem, space: Option<&'a Space>, lexicon: &'a Lexicon) -> Self {
        Self {
            system,
            space,
            lexicon,
        }
    }

    pub fn system(&self) -> &'a StarSystem {
        self.system
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Live state, but only when the player is in the displayed system.
    pub fn live_space(&self) -> Option<&'a Space> {
        self.space.filter(|s| s.is_current(self.system.name()))
    }

    pub fn is_player_system(&self) -> bool {
        self.live_space().is_some()
    }

    fn resolve_root(&self, root_override: Option<BodyId>) -> BodyId {
        match root_override {
            Some(id) if self.system.get(id).is_some() => id,
            Some(id) => {
                tracing::warn!(?id, system = self.system.name(), "Root override not in system");
                self.system.root()
            }
            None => self.system.root(),
        }
    }

    /// Annotated and sorted shadow tree for the given state.
    pub fn tree(
        &self,
        state: &OverviewState,
        root_override: Option<BodyId>,
        selection: &Selection,
    ) -> ShadowEntry<'a> {
        let root = self.resolve_root(root_override);
        let filter = BodyFilter::from_state(state);
        let space = self.live_space();

        let mut tree = annotate(self.system, root, selection, space, &filter);
        sort_tree(&mut tree, state.sort_mode, space);
        tree
    }

    /// Render one frame. Returns the number of rows drawn.
    pub fn display<P, H>(
        &self,
        state: &mut OverviewState,
        root_override: Option<BodyId>,
        selection: &Selection,
        painter: &mut P,
        handler: &mut H,
    ) -> usize
    where
        P: RowPainter,
        H: OverviewHandler,
    {
        let input = painter.controls(state);
        state.apply(input);

        let tree = self.tree(state, root_override, selection);
        let drawn = self.walk(&tree, 0, painter, handler);

        tracing::trace!(
            system = self.system.name(),
            entries = tree.len(),
            drawn,
            "Overview frame"
        );
        drawn
    }

    fn walk<P, H>(&self, entry: &ShadowEntry<'a>, depth: usize, painter: &mut P, handler: &mut H) -> usize
    where
        P: RowPainter,
        H: OverviewHandler,
    {
        if !entry.is_drawn() {
            return 0;
        }

        let (distance, live) = self.row_distance(entry.body);
        let row = OverviewRow {
            body: entry.body,
            depth,
            icon: icon(entry.body),
            label: &entry.label,
            selected: entry.selected,
            badges: entry.badges,
            distance,
            live,
        };

        match painter.row(&row) {
            RowResponse::Clicked => handler.on_row_click(entry.body),
            RowResponse::ContextMenu => handler.on_row_context_menu(entry.body),
            RowResponse::None => {}
        }

        1 + entry
            .children
            .iter()
            .map(|child| self.walk(child, depth + 1, painter, handler))
            .sum::<usize>()
    }

    /// Distance shown on a body's row: live when the player is in this
    /// system and the body is instantiated, else the orbit midpoint.
    pub fn row_distance(&self, body: &SystemBody) -> (Quantity, bool) {
        match self.live_space().and_then(|s| s.body_distance(body.id)) {
            Some(d) => (format::distance(d, false, self.lexicon), true),
            None => (
                format::distance(body.orbit_midpoint(), false, self.lexicon),
                false,
            ),
        }
    }
}

/// Glyph for a body's row.
pub fn icon(body: &SystemBody) -> &'static str {
    match (body.body_type, body.category) {
        (BodyType::Gravpoint, _) => "⊕",
        (BodyType::Star, _) => "☼",
        (BodyType::OrbitalStation, _) => "◇",
        (BodyType::SurfaceStation, _) => "▲",
        (BodyType::Asteroid, _) => "•",
        (BodyType::GasGiant, _) => "◍",
        (BodyType::RockyPlanet, BodyCategory::Moon) => "○",
        (BodyType::RockyPlanet, _) => "●",
    }
}

pub const MOON_BADGE: &str = "○";
pub const GROUND_STATION_BADGE: &str = "▲";
pub const SPACE_STATION_BADGE: &str = "◇";

/// Badge glyphs in display order.
pub fn badge_icons(badges: &Badges) -> Vec<&'static str> {
    let mut icons = Vec::with_capacity(3);
    if badges.has_moons {
        icons.push(MOON_BADGE);
    }
    if badges.has_ground_stations {
        icons.push(GROUND_STATION_BADGE);
    }
    if badges.has_space_stations {
        icons.push(SPACE_STATION_BADGE);
    }
    icons
}
