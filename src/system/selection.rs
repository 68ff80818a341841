use std::collections::HashSet;

use super::body::BodyId;
use super::live::{LiveId, Space};

/// Something the player can have selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionRef {
    Body(BodyId),
    Live(LiveId),
}

/// Set of currently selected objects, supplied per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: HashSet<SelectionRef>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: SelectionRef) -> bool {
        self.items.insert(item)
    }

    pub fn remove(&mut self, item: &SelectionRef) -> bool {
        self.items.remove(item)
    }

    pub fn contains(&self, item: &SelectionRef) -> bool {
        self.items.contains(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the body, or the live object standing for it, is selected.
    pub fn targets(&self, body: BodyId, space: Option<&Space>) -> bool {
        if self.contains(&SelectionRef::Body(body)) {
            return true;
        }
        space
            .and_then(|s| s.live_for(body))
            .is_some_and(|live| self.contains(&SelectionRef::Live(live.id)))
    }
}

impl FromIterator<SelectionRef> for Selection {
    fn from_iter<I: IntoIterator<Item = SelectionRef>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
