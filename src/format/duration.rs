use super::lexicon::{Key, Lexicon};

/// Number of components shown when the caller has no preference.
pub const DEFAULT_DURATION_ELEMENTS: usize = 5;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Format a signed number of seconds as weeks/days/hours/minutes/seconds.
///
/// Output covers a window of `elements` units that begins at the most
/// significant non-zero unit; zero units inside the window are skipped, so
/// `elements` bounds the number of components. Fractional seconds are
/// dropped. An all-zero duration is `0s`.
pub fn duration(seconds: f64, elements: usize, lex: &Lexicon) -> String {
    let negative = seconds < 0.0;
    let total = seconds.abs().floor() as u64;

    let units = [
        (total / WEEK, Key::UnitWeeks),
        (total % WEEK / DAY, Key::UnitDays),
        (total % DAY / HOUR, Key::UnitHours),
        (total % HOUR / MINUTE, Key::UnitMinutes),
        (total % MINUTE, Key::UnitSeconds),
    ];

    let mut remaining = elements.max(1);
    let mut started = false;
    let mut parts = Vec::new();

    for (value, unit) in units {
        if remaining == 0 {
            break;
        }
        if value != 0 {
            parts.push(format!("{}{}", value, lex.get(unit)));
            started = true;
        }
        if started {
            remaining -= 1;
        }
    }

    if parts.is_empty() {
        return format!("0{}", lex.get(Key::UnitSeconds));
    }

    let joined = parts.join(" ");
    if negative {
        format!("-{}", joined)
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(seconds: f64, elements: usize) -> String {
        duration(seconds, elements, &Lexicon::default())
    }

    #[test]
    fn test_duration_zero() {
        assert_eq!(fmt(0.0, 5), "0s");
        assert_eq!(fmt(0.4, 5), "0s");
        assert_eq!(fmt(-0.4, 5), "0s");
    }

    #[test]
    fn test_duration_negative() {
        let out = fmt(-65.0, 5);
        assert_eq!(out, "-1m 5s");
        assert!(out.starts_with('-'));
    }

    #[test]
    fn test_duration_element_limit() {
        assert_eq!(fmt(3661.0, 3), "1h 1m 1s");
        assert_eq!(fmt(3661.0, 2), "1h 1m");
        assert_eq!(fmt(3661.0, 1), "1h");
    }

    #[test]
    fn test_duration_unit_boundaries() {
        assert_eq!(fmt(59.0, 5), "59s");
        assert_eq!(fmt(60.0, 5), "1m");
        assert_eq!(fmt(3599.0, 5), "59m 59s");
        assert_eq!(fmt(3600.0, 5), "1h");
        assert_eq!(fmt(86_399.0, 5), "23h 59m 59s");
        assert_eq!(fmt(86_400.0, 5), "1d");
        assert_eq!(fmt(604_799.0, 5), "6d 23h 59m 59s");
        assert_eq!(fmt(604_800.0, 5), "1w");
    }

    #[test]
    fn test_duration_window_counts_skipped_zeros() {
        // 1 week, 0 days, 3 hours: the zero day still consumes a slot
        let seconds = (604_800 + 3 * 3600) as f64;
        assert_eq!(fmt(seconds, 2), "1w");
        assert_eq!(fmt(seconds, 3), "1w 3h");
    }

    #[test]
    fn test_duration_zero_elements_treated_as_one() {
        assert_eq!(fmt(3661.0, 0), "1h");
    }

    #[test]
    fn test_duration_year() {
        // 365.25 days
        assert_eq!(fmt(31_557_600.0, 5), "52w 1d 6h");
    }
}
