use super::lexicon::{Key, Lexicon};
use super::Quantity;

/// Mass of the Earth in kilograms.
pub const EARTH_MASS: f64 = 5.9722e24;

/// Mass of the Sun in kilograms.
pub const SOLAR_MASS: f64 = 1.98847e30;

/// Masses at or above this are expressed in Solar masses.
pub const SOLAR_MASS_THRESHOLD: f64 = SOLAR_MASS * 0.01;

// (upper bound, divisor, unit) for the metric tiers
const METRIC_TIERS: &[(f64, f64, Key)] = &[
    (1e3, 1.0, Key::UnitKilograms),
    (1e6, 1e3, Key::UnitTonnes),
    (1e9, 1e6, Key::UnitKilotonnes),
    (1e12, 1e9, Key::UnitMegatonnes),
    (1e15, 1e12, Key::UnitGigatonnes),
    (1e18, 1e15, Key::UnitTeratonnes),
    (EARTH_MASS, 1e18, Key::UnitPetatonnes),
];

/// Format a mass in kilograms.
///
/// Metric tiers run from kilograms up to petatonnes. From one Earth mass
/// upward the value is phrased in Earth masses, and from
/// [`SOLAR_MASS_THRESHOLD`] upward in Solar masses.
pub fn mass(kg: f64, lex: &Lexicon) -> Quantity {
    let m = kg.abs();

    for &(limit, divisor, unit) in METRIC_TIERS {
        if m < limit {
            return Quantity::new(format!("{:.2}", kg / divisor), lex.get(unit));
        }
    }

    if m < SOLAR_MASS_THRESHOLD {
        Quantity::new(format!("{:.2}", kg / EARTH_MASS), lex.get(Key::EarthMasses))
    } else {
        Quantity::new(format!("{:.2}", kg / SOLAR_MASS), lex.get(Key::SolarMasses))
    }
}
