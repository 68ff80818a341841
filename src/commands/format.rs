//! Format command implementation

use crate::cli::{FormatArgs, Quantity};
use crate::config::Config;
use crate::error::Result;
use crate::format;

/// Format one quantity the way the overview displays it.
pub fn render(quantity: &Quantity, config: &Config) -> String {
    let lex = &config.strings;
    let settings = &config.format;

    match *quantity {
        Quantity::Distance { meters, fractional } => {
            format::distance(meters, fractional, lex).to_string()
        }
        Quantity::Speed { meters_per_second } => format::speed(meters_per_second, lex).to_string(),
        Quantity::Mass { kilograms } => format::mass(kilograms, lex).to_string(),
        Quantity::Duration { seconds, elements } => format::duration(
            seconds,
            elements.unwrap_or(settings.duration_elements),
            lex,
        ),
        Quantity::Latitude { degrees } => format::latitude(degrees, lex),
        Quantity::Longitude { degrees } => format::longitude(degrees, lex),
        Quantity::Abbrev { value, places } => format::abbreviate(
            value,
            places.unwrap_or(settings.abbreviation_places),
            lex,
        ),
        Quantity::Number { value, places } => {
            format::number(value, places, &settings.thousands_separator)
        }
    }
}

/// Run the format command
pub fn run(args: FormatArgs, config: &Config) -> Result<()> {
    tracing::debug!(quantity = ?args.quantity, "Formatting quantity");
    println!("{}", render(&args.quantity, config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Key, Lexicon};

    #[test]
    fn test_render_uses_config_defaults() {
        let mut config = Config::default();
        config.format.duration_elements = 2;
        config.format.thousands_separator = " ".into();

        let out = render(
            &Quantity::Duration {
                seconds: 3661.0,
                elements: None,
            },
            &config,
        );
        assert_eq!(out, "1h 1m");

        let out = render(
            &Quantity::Number {
                value: 1234567.0,
                places: 0,
            },
            &config,
        );
        assert_eq!(out, "1 234 567");
    }

    #[test]
    fn test_render_explicit_elements_win() {
        let config = Config::default();
        let out = render(
            &Quantity::Duration {
                seconds: 3661.0,
                elements: Some(1),
            },
            &config,
        );
        assert_eq!(out, "1h");
    }

    #[test]
    fn test_render_with_string_overrides() {
        let config = Config {
            strings: Lexicon::new().with(Key::UnitKilometers, "kilometres"),
            ..Default::default()
        };
        let out = render(
            &Quantity::Distance {
                meters: 1500.0,
                fractional: false,
            },
            &config,
        );
        assert_eq!(out, "1.50 kilometres");
    }
}
