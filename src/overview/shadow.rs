//! The per-frame annotated copy of the body hierarchy.

use serde::Serialize;

use crate::system::{BodyCategory, BodyId, Selection, Space, StarSystem, SystemBody};

use super::filter::BodyFilter;

/// Which categories appear among a body's direct children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Badges {
    pub has_moons: bool,
    pub has_ground_stations: bool,
    pub has_space_stations: bool,
}

impl Badges {
    fn with(mut self, category: BodyCategory) -> Self {
        match category {
            BodyCategory::Moon => self.has_moons = true,
            BodyCategory::GroundStation => self.has_ground_stations = true,
            BodyCategory::SpaceStation => self.has_space_stations = true,
            BodyCategory::Planet | BodyCategory::Other => {}
        }
        self
    }

    pub fn any(&self) -> bool {
        self.has_moons || self.has_ground_stations || self.has_space_stations
    }
}

/// One node of the shadow tree.
#[derive(Debug, Clone)]
pub struct ShadowEntry<'a> {
    pub body: &'a SystemBody,
    pub label: String,
    pub children: Vec<ShadowEntry<'a>>,
    /// The body itself is in the selection
    pub selected: bool,
    /// Passes the filter, is selected, or has a visible descendant
    pub visible: bool,
    /// Some descendant is selected
    pub children_visible: bool,
    pub badges: Badges,
}

impl<'a> ShadowEntry<'a> {
    /// Whether the render walk draws this entry and descends into it.
    pub fn is_drawn(&self) -> bool {
        self.visible || self.children_visible
    }

    pub fn find(&self, id: BodyId) -> Option<&ShadowEntry<'a>> {
        if self.body.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Total number of entries in this subtree.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(ShadowEntry::len).sum::<usize>()
    }
}

/// Build the shadow tree under `root`.
///
/// Children are built first and returned by value; each parent then folds
/// its children's flags into its own, so state only ever flows upward.
pub fn annotate<'a>(
    system: &'a StarSystem,
    root: BodyId,
    selection: &Selection,
    space: Option<&Space>,
    filter: &BodyFilter,
) -> ShadowEntry<'a> {
    let body = system.body(root);

    let children: Vec<ShadowEntry<'a>> = system
        .children(root)
        .iter()
        .map(|child| annotate(system, *child, selection, space, filter))
        .collect();

    let selected = selection.targets(root, space);
    let badges = children
        .iter()
        .fold(Badges::default(), |acc, child| acc.with(child.body.category));
    let descendant_visible = children.iter().any(|c| c.visible);
    let descendant_selected = children.iter().any(|c| c.selected || c.children_visible);

    ShadowEntry {
        body,
        label: body.name.clone(),
        children,
        selected,
        visible: selected || descendant_visible || filter.matches(body),
        children_visible: descendant_selected,
        badges,
    }
}
