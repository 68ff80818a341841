//! String table keyed by symbolic names.
//!
//! Every piece of user-facing text the overview emits (unit suffixes,
//! control labels, tooltips) goes through a [`Lexicon`]. The built-in table
//! is English; the `[strings]` section of the config file overrides entries
//! by name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Symbolic string names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    UnitMeters,
    UnitKilometers,
    UnitMegameters,
    UnitAu,
    UnitMetersPerSecond,
    UnitKilometersPerSecond,
    UnitMegametersPerSecond,
    UnitKilograms,
    UnitTonnes,
    UnitKilotonnes,
    UnitMegatonnes,
    UnitGigatonnes,
    UnitTeratonnes,
    UnitPetatonnes,
    EarthMasses,
    SolarMasses,
    UnitWeeks,
    UnitDays,
    UnitHours,
    UnitMinutes,
    UnitSeconds,
    LatitudeNorth,
    LatitudeSouth,
    LongitudeEast,
    LongitudeWest,
    NumberThousands,
    NumberMillions,
    NumberBillions,
    NumberTrillions,
    System,
    Filter,
    ShowMoons,
    ShowStations,
    SortByDistance,
    SortByOrbit,
    HasMoons,
    HasGroundStations,
    HasSpaceStations,
    MenuSelect,
    MenuFocus,
    MenuResetFocus,
    NoMatches,
    PlayerPresent,
    RemoteView,
    LiveDistances,
    OrbitalDistances,
}

impl Key {
    pub const ALL: &'static [Key] = &[
        Key::UnitMeters,
        Key::UnitKilometers,
        Key::UnitMegameters,
        Key::UnitAu,
        Key::UnitMetersPerSecond,
        Key::UnitKilometersPerSecond,
        Key::UnitMegametersPerSecond,
        Key::UnitKilograms,
        Key::UnitTonnes,
        Key::UnitKilotonnes,
        Key::UnitMegatonnes,
        Key::UnitGigatonnes,
        Key::UnitTeratonnes,
        Key::UnitPetatonnes,
        Key::EarthMasses,
        Key::SolarMasses,
        Key::UnitWeeks,
        Key::UnitDays,
        Key::UnitHours,
        Key::UnitMinutes,
        Key::UnitSeconds,
        Key::LatitudeNorth,
        Key::LatitudeSouth,
        Key::LongitudeEast,
        Key::LongitudeWest,
        Key::NumberThousands,
        Key::NumberMillions,
        Key::NumberBillions,
        Key::NumberTrillions,
        Key::System,
        Key::Filter,
        Key::ShowMoons,
        Key::ShowStations,
        Key::SortByDistance,
        Key::SortByOrbit,
        Key::HasMoons,
        Key::HasGroundStations,
        Key::HasSpaceStations,
        Key::MenuSelect,
        Key::MenuFocus,
        Key::MenuResetFocus,
        Key::NoMatches,
        Key::PlayerPresent,
        Key::RemoteView,
        Key::LiveDistances,
        Key::OrbitalDistances,
    ];

    /// Name used in the `[strings]` config table.
    pub fn name(self) -> &'static str {
        match self {
            Key::UnitMeters => "UNIT_METERS",
            Key::UnitKilometers => "UNIT_KILOMETERS",
            Key::UnitMegameters => "UNIT_MEGAMETERS",
            Key::UnitAu => "UNIT_AU",
            Key::UnitMetersPerSecond => "UNIT_METERS_PER_SECOND",
            Key::UnitKilometersPerSecond => "UNIT_KILOMETERS_PER_SECOND",
            Key::UnitMegametersPerSecond => "UNIT_MEGAMETERS_PER_SECOND",
            Key::UnitKilograms => "UNIT_KILOGRAMS",
            Key::UnitTonnes => "UNIT_TONNES",
            Key::UnitKilotonnes => "UNIT_KILOTONNES",
            Key::UnitMegatonnes => "UNIT_MEGATONNES",
            Key::UnitGigatonnes => "UNIT_GIGATONNES",
            Key::UnitTeratonnes => "UNIT_TERATONNES",
            Key::UnitPetatonnes => "UNIT_PETATONNES",
            Key::EarthMasses => "EARTH_MASSES",
            Key::SolarMasses => "SOLAR_MASSES",
            Key::UnitWeeks => "UNIT_WEEKS",
            Key::UnitDays => "UNIT_DAYS",
            Key::UnitHours => "UNIT_HOURS",
            Key::UnitMinutes => "UNIT_MINUTES",
            Key::UnitSeconds => "UNIT_SECONDS",
            Key::LatitudeNorth => "LATITUDE_NORTH_ABBREV",
            Key::LatitudeSouth => "LATITUDE_SOUTH_ABBREV",
            Key::LongitudeEast => "LONGITUDE_EAST_ABBREV",
            Key::LongitudeWest => "LONGITUDE_WEST_ABBREV",
            Key::NumberThousands => "NUMBER_THOUSANDS",
            Key::NumberMillions => "NUMBER_MILLIONS",
            Key::NumberBillions => "NUMBER_BILLIONS",
            Key::NumberTrillions => "NUMBER_TRILLIONS",
            Key::System => "SYSTEM",
            Key::Filter => "FILTER",
            Key::ShowMoons => "SHOW_MOONS",
            Key::ShowStations => "SHOW_STATIONS",
            Key::SortByDistance => "SORT_BY_DISTANCE",
            Key::SortByOrbit => "SORT_BY_ORBIT",
            Key::HasMoons => "HAS_MOONS",
            Key::HasGroundStations => "HAS_GROUND_STATIONS",
            Key::HasSpaceStations => "HAS_SPACE_STATIONS",
            Key::MenuSelect => "MENU_SELECT",
            Key::MenuFocus => "MENU_FOCUS",
            Key::MenuResetFocus => "MENU_RESET_FOCUS",
            Key::NoMatches => "NO_MATCHES",
            Key::PlayerPresent => "PLAYER_PRESENT",
            Key::RemoteView => "REMOTE_VIEW",
            Key::LiveDistances => "LIVE_DISTANCES",
            Key::OrbitalDistances => "ORBITAL_DISTANCES",
        }
    }

    /// Built-in English text.
    pub fn default_text(self) -> &'static str {
        match self {
            Key::UnitMeters => "m",
            Key::UnitKilometers => "km",
            Key::UnitMegameters => "Mm",
            Key::UnitAu => "AU",
            Key::UnitMetersPerSecond => "m/s",
            Key::UnitKilometersPerSecond => "km/s",
            Key::UnitMegametersPerSecond => "Mm/s",
            Key::UnitKilograms => "kg",
            Key::UnitTonnes => "t",
            Key::UnitKilotonnes => "kt",
            Key::UnitMegatonnes => "Mt",
            Key::UnitGigatonnes => "Gt",
            Key::UnitTeratonnes => "Tt",
            Key::UnitPetatonnes => "Pt",
            Key::EarthMasses => "Earth masses",
            Key::SolarMasses => "Solar masses",
            Key::UnitWeeks => "w",
            Key::UnitDays => "d",
            Key::UnitHours => "h",
            Key::UnitMinutes => "m",
            Key::UnitSeconds => "s",
            Key::LatitudeNorth => "N",
            Key::LatitudeSouth => "S",
            Key::LongitudeEast => "E",
            Key::LongitudeWest => "W",
            Key::NumberThousands => "k",
            Key::NumberMillions => "mil",
            Key::NumberBillions => "bil",
            Key::NumberTrillions => "trn",
            Key::System => "System",
            Key::Filter => "Filter",
            Key::ShowMoons => "Moons",
            Key::ShowStations => "Stations",
            Key::SortByDistance => "Sort: distance",
            Key::SortByOrbit => "Sort: orbit",
            Key::HasMoons => "Has moons",
            Key::HasGroundStations => "Has ground stations",
            Key::HasSpaceStations => "Has space stations",
            Key::MenuSelect => "Select",
            Key::MenuFocus => "Focus here",
            Key::MenuResetFocus => "Reset focus",
            Key::NoMatches => "No matching bodies",
            Key::PlayerPresent => "You are here",
            Key::RemoteView => "Remote view",
            Key::LiveDistances => "Distances from your position",
            Key::OrbitalDistances => "Distances are orbit midpoints",
        }
    }

    pub fn from_name(name: &str) -> Option<Key> {
        Key::ALL.iter().copied().find(|key| key.name() == name)
    }
}

/// Localized string lookup with built-in fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    overrides: HashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a single entry.
    pub fn with(mut self, key: Key, text: impl Into<String>) -> Self {
        self.overrides.insert(key.name().to_string(), text.into());
        self
    }

    pub fn get(&self, key: Key) -> &str {
        self.overrides
            .get(key.name())
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }

    /// Override names that do not correspond to any [`Key`].
    pub fn unknown_keys(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .overrides
            .keys()
            .map(String::as_str)
            .filter(|name| Key::from_name(name).is_none())
            .collect();
        unknown.sort_unstable();
        unknown
    }
}
