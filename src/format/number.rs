use super::lexicon::{Key, Lexicon};

/// Abbreviate a large number by powers of 1000, e.g. `1.50 mil`.
pub fn abbreviate(value: f64, places: usize, lex: &Lexicon) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let n = value.abs();

    let (scaled, suffix) = if n < 1e3 {
        (n, None)
    } else if n < 1e6 {
        (n / 1e3, Some(Key::NumberThousands))
    } else if n < 1e9 {
        (n / 1e6, Some(Key::NumberMillions))
    } else if n < 1e12 {
        (n / 1e9, Some(Key::NumberBillions))
    } else {
        (n / 1e12, Some(Key::NumberTrillions))
    };

    match suffix {
        Some(key) => format!("{}{:.*} {}", sign, places, scaled, lex.get(key)),
        None => format!("{}{:.*}", sign, places, scaled),
    }
}

/// Insert thousands separators into an integer.
pub fn grouped(value: i64, separator: &str) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_digits(value.unsigned_abs(), separator))
}

/// Format a float with `places` decimals and grouped integer digits.
pub fn number(value: f64, places: usize, separator: &str) -> String {
    let rounded = format!("{:.*}", places, value.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };

    let int_grouped = match int_part.parse::<u64>() {
        Ok(n) => group_digits(n, separator),
        // beyond u64, leave the digits as they are
        Err(_) => int_part.to_string(),
    };

    let is_zero = rounded.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, int_grouped, frac),
        None => format!("{}{}", sign, int_grouped),
    }
}

fn group_digits(mut n: u64, separator: &str) -> String {
    if n < 1000 {
        return n.to_string();
    }

    let mut groups = Vec::new();
    while n >= 1000 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.push(n.to_string());
    groups.reverse();
    groups.join(separator)
}
