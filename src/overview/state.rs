use serde::{Deserialize, Serialize};

/// Ordering of sibling rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Straight-line distance to the player.
    Distance,
    /// Orbital distance from the parent.
    #[default]
    Orbit,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            SortMode::Distance => SortMode::Orbit,
            SortMode::Orbit => SortMode::Distance,
        }
    }
}

/// Widget state that persists across frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewState {
    pub filter: String,
    pub show_moons: bool,
    pub show_stations: bool,
    pub sort_mode: SortMode,
}

impl Default for OverviewState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            show_moons: true,
            show_stations: true,
            sort_mode: SortMode::default(),
        }
    }
}

/// What the widget's own controls reported during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub toggle_moons: bool,
    pub toggle_stations: bool,
    pub cycle_sort: bool,
    /// New content of the filter text field, if it was edited
    pub filter: Option<String>,
}

impl ControlInput {
    pub fn is_empty(&self) -> bool {
        *self == ControlInput::default()
    }
}

impl OverviewState {
    /// Fold one frame of control input into the state.
    pub fn apply(&mut self, input: ControlInput) {
        if input.is_empty() {
            return;
        }
        if input.toggle_moons {
            self.show_moons = !self.show_moons;
        }
        if input.toggle_stations {
            self.show_stations = !self.show_stations;
        }
        if input.cycle_sort {
            self.sort_mode = self.sort_mode.next();
        }
        if let Some(filter) = input.filter {
            self.filter = filter;
        }
        tracing::debug!(state = ?self, "Overview controls changed");
    }
}
