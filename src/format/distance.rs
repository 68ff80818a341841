use super::lexicon::{Key, Lexicon};
use super::Quantity;

/// One astronomical unit in metres.
pub const AU: f64 = 149_597_870_700.0;

/// Format a distance in metres.
///
/// Below a kilometre the value is printed as whole metres, or with two
/// decimals when `fractional` is set. Larger values step through km, Mm and
/// AU with two decimals.
pub fn distance(meters: f64, fractional: bool, lex: &Lexicon) -> Quantity {
    let d = meters.abs();

    if d < 1e3 {
        let value = if fractional {
            format!("{:.2}", meters)
        } else {
            format!("{}", meters.floor() as i64)
        };
        Quantity::new(value, lex.get(Key::UnitMeters))
    } else if d < 1e6 {
        Quantity::new(format!("{:.2}", meters / 1e3), lex.get(Key::UnitKilometers))
    } else if d < 1e9 {
        Quantity::new(format!("{:.2}", meters / 1e6), lex.get(Key::UnitMegameters))
    } else {
        Quantity::new(format!("{:.2}", meters / AU), lex.get(Key::UnitAu))
    }
}

/// Format a speed in metres per second. There is no AU/s tier.
pub fn speed(meters_per_second: f64, lex: &Lexicon) -> Quantity {
    let v = meters_per_second.abs();

    if v < 1e3 {
        Quantity::new(
            format!("{:.2}", meters_per_second),
            lex.get(Key::UnitMetersPerSecond),
        )
    } else if v < 1e6 {
        Quantity::new(
            format!("{:.2}", meters_per_second / 1e3),
            lex.get(Key::UnitKilometersPerSecond),
        )
    } else {
        Quantity::new(
            format!("{:.2}", meters_per_second / 1e6),
            lex.get(Key::UnitMegametersPerSecond),
        )
    }
}
