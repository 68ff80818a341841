use super::lexicon::{Key, Lexicon};

/// Format decimal degrees of latitude, e.g. `N 51° 28' 37"`.
pub fn latitude(degrees: f64, lex: &Lexicon) -> String {
    let hemisphere = if degrees < 0.0 {
        Key::LatitudeSouth
    } else {
        Key::LatitudeNorth
    };
    sexagesimal(lex.get(hemisphere), degrees.abs())
}

/// Format decimal degrees of longitude, e.g. `W 0° 00' 02"`.
pub fn longitude(degrees: f64, lex: &Lexicon) -> String {
    let hemisphere = if degrees < 0.0 {
        Key::LongitudeWest
    } else {
        Key::LongitudeEast
    };
    sexagesimal(lex.get(hemisphere), degrees.abs())
}

fn sexagesimal(prefix: &str, magnitude: f64) -> String {
    // Round once on whole arc-seconds so 59.9" carries into the minute
    let total = (magnitude * 3600.0).round() as u64;
    let deg = total / 3600;
    let min = total % 3600 / 60;
    let sec = total % 60;
    format!("{} {}° {:02}' {:02}\"", prefix, deg, min, sec)
}
