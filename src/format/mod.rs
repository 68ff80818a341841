//! Display formatting for physical quantities.
//!
//! Every function here is pure: the same number and lexicon always produce
//! the same text. Unit scale is picked automatically from the magnitude.

mod angle;
mod distance;
mod duration;
pub mod lexicon;
mod mass;
mod number;

use std::fmt;

use serde::Serialize;

pub use angle::{latitude, longitude};
pub use distance::{distance, speed, AU};
pub use duration::{duration, DEFAULT_DURATION_ELEMENTS};
pub use lexicon::{Key, Lexicon};
pub use mass::{mass, EARTH_MASS, SOLAR_MASS, SOLAR_MASS_THRESHOLD};
pub use number::{abbreviate, grouped, number};

/// A formatted number paired with its unit text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quantity {
    pub value: String,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            f.write_str(&self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_display() {
        assert_eq!(Quantity::new("1.00", "AU").to_string(), "1.00 AU");
        assert_eq!(Quantity::new("42", "").to_string(), "42");
    }
}
