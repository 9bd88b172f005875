//! Pure formatting helpers: relative durations, rating severity classes,
//! and signed rating strings.
//!
//! Everything here is stateless; the functions take plain values and return
//! plain strings, so hosts can call them from `view()` without ceremony.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

// Largest-first unit table; iteration order is significant.
const UNITS: [(&str, i64); 7] = [
    ("yr", 31_536_000),
    ("mt", 2_592_000),
    ("wk", 604_800),
    ("dy", 86_400),
    ("hr", 3_600),
    ("mn", 60),
    ("se", 1),
];

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Formats the distance between two timestamps as a short unit string.
///
/// The absolute difference in seconds is decomposed greedily into the
/// largest-first units `yr`, `mt`, `wk`, `dy`, `hr`, `mn`, `se`, emitting
/// `"<value> <unit>"` terms joined by single spaces until `granularity`
/// terms have been emitted or nothing remains. `base` defaults to the
/// current time when `None`. A zero difference yields an empty string, and
/// a granularity of zero places no limit on the number of terms.
///
/// # Examples
///
/// ```rust
/// use bubbletea_extras::format::relative_duration;
///
/// assert_eq!(relative_duration(90_061, Some(0), 2), "1 dy 1 hr");
/// assert_eq!(relative_duration(45, Some(0), 1), "45 se");
/// assert_eq!(relative_duration(0, Some(0), 1), "");
/// ```
pub fn relative_duration(timestamp: i64, base: Option<i64>, granularity: usize) -> String {
    let base = base.unwrap_or_else(now_secs);
    let mut difference = (timestamp - base).abs();
    let mut terms: Vec<String> = Vec::new();

    for (code, seconds) in UNITS {
        if difference >= seconds {
            let value = difference / seconds;
            difference %= seconds;
            terms.push(format!("{value} {code}"));
            if terms.len() == granularity {
                break;
            }
        }
    }

    terms.join(" ")
}

/// Severity bucket for a numeric rating.
///
/// The seven buckets run from [`RatingClass::UltraHigh`] down to
/// [`RatingClass::UltraLow`]; each carries the legacy class name hosts use
/// to pick a style (`rateUH` through `rateUL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingClass {
    /// Rating above 8.
    UltraHigh,
    /// Rating above 5.
    VeryHigh,
    /// Rating above 2.
    High,
    /// Rating above 0.
    Medium,
    /// Rating above -3.
    Low,
    /// Rating above -7.
    VeryLow,
    /// Rating of -7 or below.
    UltraLow,
}

impl RatingClass {
    /// Returns the legacy class name for this bucket.
    pub fn class_name(&self) -> &'static str {
        match self {
            RatingClass::UltraHigh => "rateUH",
            RatingClass::VeryHigh => "rateVH",
            RatingClass::High => "rateH",
            RatingClass::Medium => "rateM",
            RatingClass::Low => "rateL",
            RatingClass::VeryLow => "rateVL",
            RatingClass::UltraLow => "rateUL",
        }
    }
}

impl fmt::Display for RatingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Maps a rating to its severity bucket.
///
/// # Examples
///
/// ```rust
/// use bubbletea_extras::format::{rating_class, RatingClass};
///
/// assert_eq!(rating_class(9), RatingClass::UltraHigh);
/// assert_eq!(rating_class(0), RatingClass::Low);
/// assert_eq!(rating_class(-10), RatingClass::UltraLow);
/// ```
pub fn rating_class(rating: i64) -> RatingClass {
    if rating > 8 {
        RatingClass::UltraHigh
    } else if rating > 5 {
        RatingClass::VeryHigh
    } else if rating > 2 {
        RatingClass::High
    } else if rating > 0 {
        RatingClass::Medium
    } else if rating > -3 {
        RatingClass::Low
    } else if rating > -7 {
        RatingClass::VeryLow
    } else {
        RatingClass::UltraLow
    }
}

/// Formats a rating with a `+` prefix for positive values.
///
/// Negative and zero values pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use bubbletea_extras::format::format_rating;
///
/// assert_eq!(format_rating(5), "+5");
/// assert_eq!(format_rating(0), "0");
/// assert_eq!(format_rating(-3), "-3");
/// ```
pub fn format_rating(rating: i64) -> String {
    if rating > 0 {
        format!("+{rating}")
    } else {
        rating.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_duration_two_units() {
        // 90061s = 1 day + 1 hour + 61s; granularity 2 emits the two largest.
        assert_eq!(relative_duration(90_061, Some(0), 2), "1 dy 1 hr");
    }

    #[test]
    fn test_relative_duration_single_unit() {
        assert_eq!(relative_duration(45, Some(0), 1), "45 se");
    }

    #[test]
    fn test_relative_duration_zero_difference() {
        assert_eq!(relative_duration(1_000, Some(1_000), 1), "");
    }

    #[test]
    fn test_relative_duration_is_symmetric() {
        assert_eq!(
            relative_duration(0, Some(90_061), 2),
            relative_duration(90_061, Some(0), 2)
        );
    }

    #[test]
    fn test_relative_duration_stops_at_granularity() {
        // 1 year + 1 week + 1 day + 1 second, granularity 3 drops the tail.
        let secs = 31_536_000 + 604_800 + 86_400 + 1;
        assert_eq!(relative_duration(secs, Some(0), 3), "1 yr 1 wk 1 dy");
    }

    #[test]
    fn test_relative_duration_skips_empty_units() {
        // Exactly one week: month does not fire, week does, remainder is 0.
        assert_eq!(relative_duration(604_800, Some(0), 2), "1 wk");
    }

    #[test]
    fn test_relative_duration_unlimited_granularity() {
        assert_eq!(relative_duration(90_061, Some(0), 0), "1 dy 1 hr 1 mn 1 se");
    }

    #[test]
    fn test_rating_class_buckets() {
        assert_eq!(rating_class(9), RatingClass::UltraHigh);
        assert_eq!(rating_class(6), RatingClass::VeryHigh);
        assert_eq!(rating_class(3), RatingClass::High);
        assert_eq!(rating_class(1), RatingClass::Medium);
        assert_eq!(rating_class(0), RatingClass::Low);
        assert_eq!(rating_class(-5), RatingClass::VeryLow);
        assert_eq!(rating_class(-10), RatingClass::UltraLow);
    }

    #[test]
    fn test_rating_class_boundaries() {
        // Thresholds are strict: the boundary value falls into the bucket below.
        assert_eq!(rating_class(8), RatingClass::VeryHigh);
        assert_eq!(rating_class(5), RatingClass::High);
        assert_eq!(rating_class(2), RatingClass::Medium);
        assert_eq!(rating_class(-3), RatingClass::VeryLow);
        assert_eq!(rating_class(-7), RatingClass::UltraLow);
    }

    #[test]
    fn test_rating_class_names() {
        assert_eq!(rating_class(9).class_name(), "rateUH");
        assert_eq!(rating_class(-10).to_string(), "rateUL");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(5), "+5");
        assert_eq!(format_rating(0), "0");
        assert_eq!(format_rating(-3), "-3");
    }
}
