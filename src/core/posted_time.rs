use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::sync::LazyLock;

static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*hour").unwrap());
static DAYS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*day").unwrap());
static WEEKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*week").unwrap());
static MONTHS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*month").unwrap());

/// Converts a relative posting phrase ("3 hours ago", "just now") into an
/// absolute instant. Never fails: anything unrecognized, or any offset that
/// would leave the representable date range, is treated as posted right now,
/// so callers filtering on recency keep rather than drop it.
///
/// Categories are scanned in a fixed priority order; only the first matching
/// one is evaluated. Months are approximated as 30 days.
pub fn normalize(posted_text: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let text = posted_text.trim().to_lowercase();

    if text.contains("just") || text.contains("now") {
        return now;
    }

    let offset = if text.contains("hour") {
        first_number(&HOURS_RE, &text).and_then(Duration::try_hours)
    } else if text.contains("day") {
        first_number(&DAYS_RE, &text).and_then(Duration::try_days)
    } else if text.contains("week") {
        first_number(&WEEKS_RE, &text).and_then(Duration::try_weeks)
    } else if text.contains("month") {
        first_number(&MONTHS_RE, &text)
            .and_then(|months| months.checked_mul(30))
            .and_then(Duration::try_days)
    } else {
        None
    };

    offset
        .and_then(|offset| now.checked_sub_signed(offset))
        .unwrap_or(now)
}

fn first_number(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text)
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2025-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_just_posted_variants() {
        assert_eq!(normalize("Just posted", now()), now());
        assert_eq!(normalize("just now", now()), now());
        assert_eq!(normalize("now", now()), now());
    }

    #[test]
    fn test_hours_ago() {
        assert_eq!(normalize("3 hours ago", now()), now() - Duration::hours(3));
        assert_eq!(normalize("1 hour ago", now()), now() - Duration::hours(1));
    }

    #[test]
    fn test_days_weeks_months() {
        assert_eq!(normalize("2 days ago", now()), now() - Duration::days(2));
        assert_eq!(normalize("1 week ago", now()), now() - Duration::weeks(1));
        // Months are an explicit 30-day approximation.
        assert_eq!(normalize("2 months ago", now()), now() - Duration::days(60));
    }

    #[test]
    fn test_unrecognized_defaults_to_now() {
        assert_eq!(normalize("posted today", now()), now());
        assert_eq!(normalize("", now()), now());
        assert_eq!(normalize("Recently", now()), now());
    }

    #[test]
    fn test_unit_without_number_defaults_to_now() {
        assert_eq!(normalize("hours ago", now()), now());
        assert_eq!(normalize("many days ago", now()), now());
    }

    #[test]
    fn test_first_number_before_unit_wins() {
        assert_eq!(
            normalize("posted 5 hours 30 minutes ago", now()),
            now() - Duration::hours(5)
        );
    }

    #[test]
    fn test_out_of_range_offsets_default_to_now() {
        // Too large for Duration itself.
        assert_eq!(normalize("9000000000000000 hours ago", now()), now());
        // A representable Duration that would underflow the date range.
        assert_eq!(normalize("posted 99999999 months ago", now()), now());
        // Doesn't even fit in the capture's integer type.
        assert_eq!(normalize("99999999999999999999 days ago", now()), now());
    }

    #[test]
    fn test_just_takes_priority_over_units() {
        // "just" short-circuits before any unit scan.
        assert_eq!(normalize("just 2 hours ago", now()), now());
    }
}
