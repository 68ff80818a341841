use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::format::{Lexicon, DEFAULT_DURATION_ELEMENTS};
use crate::overview::{OverviewState, SortMode};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub overview: OverviewConfig,
    pub format: FormatConfig,
    pub tui: TuiConfig,
    /// Overrides for the built-in string table
    pub strings: Lexicon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    /// Show moons on startup
    pub show_moons: bool,
    /// Show ground and space stations on startup
    pub show_stations: bool,
    /// Initial sort order: distance, orbit
    pub sort: SortMode,
    /// Initial filter text
    pub filter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Components shown in durations (1-5)
    pub duration_elements: usize,
    /// Decimal places for abbreviated numbers
    pub abbreviation_places: usize,
    /// Thousands separator for grouped numbers
    pub thousands_separator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Show the details panel for the body under the cursor
    pub details_panel: bool,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            show_moons: true,
            show_stations: true,
            sort: SortMode::Orbit,
            filter: String::new(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            duration_elements: DEFAULT_DURATION_ELEMENTS,
            abbreviation_places: 2,
            thousands_separator: ",".to_string(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            details_panel: true,
        }
    }
}

impl OverviewConfig {
    /// Widget state the overview starts with.
    pub fn initial_state(&self) -> OverviewState {
        OverviewState {
            filter: self.filter.clone(),
            show_moons: self.show_moons,
            show_stations: self.show_stations,
            sort_mode: self.sort,
        }
    }
}

impl Config {
    /// Default config file location: `<config dir>/orrery/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("orrery").join("config.toml"))
    }

    /// Load from an explicit path, else the default location if it exists,
    /// else fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(1..=DEFAULT_DURATION_ELEMENTS).contains(&self.format.duration_elements) {
            return Err(ConfigError::Invalid(format!(
                "format.duration_elements must be 1-{}, got {}",
                DEFAULT_DURATION_ELEMENTS, self.format.duration_elements
            )));
        }
        if self.format.abbreviation_places > 6 {
            return Err(ConfigError::Invalid(format!(
                "format.abbreviation_places must be 0-6, got {}",
                self.format.abbreviation_places
            )));
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tui.tick_rate_ms must be greater than 0".into(),
            ));
        }
        for name in self.strings.unknown_keys() {
            tracing::warn!(key = name, "Ignoring unknown string override");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.format.duration_elements, 5);
        assert!(config.overview.show_moons);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[overview]"));
        assert!(toml_str.contains("sort = \"orbit\""));
    }

    #[test]
    fn initial_state_follows_overview_section() {
        let overview = OverviewConfig {
            show_moons: false,
            sort: SortMode::Distance,
            filter: "io".into(),
            ..Default::default()
        };
        let state = overview.initial_state();
        assert!(!state.show_moons);
        assert!(state.show_stations);
        assert_eq!(state.sort_mode, SortMode::Distance);
        assert_eq!(state.filter, "io");
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let mut config = Config::default();
        config.format.duration_elements = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.format.duration_elements = 6;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tui.tick_rate_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.format.abbreviation_places = 7;
        assert!(config.validate().is_err());
    }
}
