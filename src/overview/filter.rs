use crate::system::SystemBody;

use super::state::OverviewState;

/// Per-frame body predicate built from the widget state.
///
/// All criteria must pass: a case-insensitive literal substring match on the
/// name, and the moon/station visibility toggles.
#[derive(Debug, Clone)]
pub struct BodyFilter {
    needle: String,
    show_moons: bool,
    show_stations: bool,
}

impl BodyFilter {
    pub fn new(text: &str, show_moons: bool, show_stations: bool) -> Self {
        Self {
            needle: text.to_lowercase(),
            show_moons,
            show_stations,
        }
    }

    pub fn from_state(state: &OverviewState) -> Self {
        Self::new(&state.filter, state.show_moons, state.show_stations)
    }

    /// A filter that accepts every body.
    pub fn all() -> Self {
        Self::new("", true, true)
    }

    pub fn matches(&self, body: &SystemBody) -> bool {
        if !self.show_moons && body.category.is_moon() {
            return false;
        }
        if !self.show_stations && body.category.is_station() {
            return false;
        }
        self.needle.is_empty() || body.name.to_lowercase().contains(&self.needle)
    }
}
