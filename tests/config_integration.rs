use orrery::config::Config;
use orrery::format::Key;
use orrery::overview::SortMode;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[overview]
show_moons = false
show_stations = true
sort = "distance"
filter = "jup"

[format]
duration_elements = 3
abbreviation_places = 1
thousands_separator = "."

[tui]
tick_rate_ms = 500
details_panel = false

[strings]
UNIT_AU = "UA"
SHOW_MOONS = "Lunes"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert!(!config.overview.show_moons);
    assert_eq!(config.overview.sort, SortMode::Distance);
    assert_eq!(config.overview.filter, "jup");
    assert_eq!(config.format.duration_elements, 3);
    assert_eq!(config.format.thousands_separator, ".");
    assert_eq!(config.tui.tick_rate_ms, 500);
    assert!(!config.tui.details_panel);
    assert_eq!(config.strings.get(Key::UnitAu), "UA");
    assert_eq!(config.strings.get(Key::ShowMoons), "Lunes");
    assert_eq!(config.strings.get(Key::UnitKilometers), "km");
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[format]
duration_elements = 2
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert_eq!(config.format.duration_elements, 2);
    // Default values
    assert_eq!(config.format.abbreviation_places, 2);
    assert!(config.overview.show_moons);
    assert_eq!(config.overview.sort, SortMode::Orbit);
    assert_eq!(config.tui.tick_rate_ms, 250);
}

#[test]
fn empty_config_file_is_default() {
    let file = NamedTempFile::new().unwrap();
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.format.duration_elements, 5);
    assert!(config.strings.unknown_keys().is_empty());
}

#[test]
fn unknown_string_keys_are_ignored() {
    let config_content = r#"
[strings]
NOT_A_STRING = "whatever"
UNIT_METERS = "metres"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.strings.unknown_keys(), vec!["NOT_A_STRING"]);
    assert_eq!(config.strings.get(Key::UnitMeters), "metres");
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_invalid_sort_returns_error() {
    let config_content = r#"
[overview]
sort = "alphabetical"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn parse_out_of_range_returns_error() {
    let config_content = r#"
[format]
duration_elements = 9
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("duration_elements"));
}

#[test]
fn missing_explicit_file_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/orrery.toml")));
    assert!(result.is_err());
}
