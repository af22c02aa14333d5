use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The (label, min years, max years) triple extracted from free text.
/// Both bounds unset means the requirement is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExperienceRequirement {
    pub label: String,
    pub min_years: Option<i32>,
    pub max_years: Option<i32>,
}

impl ExperienceRequirement {
    fn bounded(label: String, min_years: i32, max_years: i32) -> Self {
        Self {
            label,
            min_years: Some(min_years),
            max_years: Some(max_years),
        }
    }

    fn open_ended(min_years: i32) -> Self {
        Self {
            label: format!("{}+ years", min_years),
            min_years: Some(min_years),
            max_years: None,
        }
    }
}

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:-|to)\s*(\d+)\s*years?(?:\s+of)?\s+experience").unwrap()
});
static PLUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*\+\s*years?(?:\s+of)?\s+experience").unwrap());
static MINIMUM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:minimum|min|at least)\s+(?:of\s+)?(\d+)\s*years?(?:\s+of)?\s+experience")
        .unwrap()
});
static BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*years?(?:\s+of)?\s+experience").unwrap());

/// Named seniority levels, checked by substring containment only when no
/// numeric pattern matched. Order is the classification priority.
const LEVEL_RULES: [(&str, i32, i32); 9] = [
    ("fresher", 0, 1),
    ("graduate", 0, 2),
    ("entry level", 0, 2),
    ("junior", 0, 3),
    ("mid level", 2, 8),
    ("intermediate", 3, 8),
    ("senior", 5, 15),
    ("lead", 7, 20),
    ("principal", 8, 20),
];

/// Explicit no-experience indicators, the lowest-priority rule. "fresher" and
/// "entry level" also appear in the level table above and so never reach this
/// branch; the order is kept as-is rather than pruning the overlap.
const NO_EXPERIENCE_INDICATORS: [&str; 4] = ["no experience", "fresher", "0 years", "entry level"];

/// Converts free text into a structured experience requirement.
///
/// An ordered, greedy, first-match classifier, not a parser: numeric patterns
/// (explicit range, "N+", "minimum N", bare "N years experience") win over
/// named levels, which win over no-experience indicators. Text matching
/// nothing yields the unknown requirement.
pub fn extract(text: &str) -> ExperienceRequirement {
    let text = text.to_lowercase();

    if let Some(caps) = RANGE_RE.captures(&text) {
        if let (Ok(min), Ok(max)) = (caps[1].parse::<i32>(), caps[2].parse::<i32>()) {
            return ExperienceRequirement::bounded(format!("{}-{} years", min, max), min, max);
        }
    }
    for re in [&*PLUS_RE, &*MINIMUM_RE, &*BARE_RE] {
        if let Some(caps) = re.captures(&text) {
            if let Ok(min) = caps[1].parse::<i32>() {
                return ExperienceRequirement::open_ended(min);
            }
        }
    }
    for (level, min, max) in LEVEL_RULES {
        if text.contains(level) {
            return ExperienceRequirement::bounded(title_case(level), min, max);
        }
    }
    for indicator in NO_EXPERIENCE_INDICATORS {
        if text.contains(indicator) {
            return ExperienceRequirement::bounded(title_case(indicator), 0, 2);
        }
    }

    ExperienceRequirement::default()
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scores how well a posting's extracted requirement overlaps the caller's
/// acceptable range, as an integer in [0, 10].
///
/// Unknown requirements get a neutral 5 when unknowns are acceptable, else 0.
/// A missing lower bound is treated as 0 and a missing upper bound as the
/// lower bound plus an assumed 5-year spread. Overlapping ranges score by
/// the overlap's share of the shorter range; disjoint ranges within a two
/// year gap score a near-miss 3, anything further 0.
pub fn match_score(
    job_min: Option<i32>,
    job_max: Option<i32>,
    filter_min: i32,
    filter_max: i32,
    include_unknown: bool,
) -> i32 {
    if job_min.is_none() && job_max.is_none() {
        return if include_unknown { 5 } else { 0 };
    }

    // Widened so extreme extracted bounds (scraped text can claim any number
    // of years) cannot overflow the length and gap arithmetic below.
    let job_min = i64::from(job_min.unwrap_or(0));
    let job_max = job_max.map(i64::from).unwrap_or(job_min + 5);
    let filter_min = i64::from(filter_min);
    let filter_max = i64::from(filter_max);

    let lo = job_min.max(filter_min);
    let hi = job_max.min(filter_max);

    if lo <= hi {
        // Inclusive integer ranges: [2,5] has length 4.
        let overlap = (hi - lo + 1) as f64;
        let job_len = (job_max - job_min + 1) as f64;
        let filter_len = (filter_max - filter_min + 1) as f64;
        let ratio = overlap / job_len.min(filter_len);
        (ratio * 10.0).floor() as i32
    } else {
        let gap = if job_min > filter_max {
            job_min - filter_max
        } else {
            filter_min - job_max
        };
        if gap <= 2 {
            3
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_extracted(text: &str, label: &str, min: Option<i32>, max: Option<i32>) {
        let req = extract(text);
        assert_eq!(req.label, label, "label for {:?}", text);
        assert_eq!(req.min_years, min, "min for {:?}", text);
        assert_eq!(req.max_years, max, "max for {:?}", text);
    }

    #[test]
    fn test_explicit_range() {
        assert_extracted("3-5 years of experience", "3-5 years", Some(3), Some(5));
        assert_extracted("2 to 4 years experience", "2-4 years", Some(2), Some(4));
        assert_extracted("Requires 1 - 3 years experience", "1-3 years", Some(1), Some(3));
    }

    #[test]
    fn test_plus_years() {
        assert_extracted("5+ years experience required", "5+ years", Some(5), None);
        assert_extracted("with 10+ years of experience", "10+ years", Some(10), None);
    }

    #[test]
    fn test_minimum_qualifier() {
        assert_extracted("minimum 4 years of experience", "4+ years", Some(4), None);
        assert_extracted("at least 2 years experience", "2+ years", Some(2), None);
        assert_extracted("min 6 years experience", "6+ years", Some(6), None);
    }

    #[test]
    fn test_bare_years() {
        assert_extracted("7 years of experience in ML", "7+ years", Some(7), None);
        assert_extracted("3 years experience", "3+ years", Some(3), None);
    }

    #[test]
    fn test_named_levels() {
        assert_extracted("looking for a fresher", "Fresher", Some(0), Some(1));
        assert_extracted("Senior ML Engineer", "Senior", Some(5), Some(15));
        assert_extracted("entry level role", "Entry Level", Some(0), Some(2));
        assert_extracted("Tech Lead position", "Lead", Some(7), Some(20));
        assert_extracted("mid level developer", "Mid Level", Some(2), Some(8));
    }

    #[test]
    fn test_no_experience_indicators() {
        assert_extracted("no experience needed", "No Experience", Some(0), Some(2));
    }

    #[test]
    fn test_unknown() {
        assert_extracted("great team culture", "", None, None);
        assert_extracted("", "", None, None);
    }

    #[test]
    fn test_numeric_beats_level() {
        // Ambiguity resolves to whichever rule is scanned first.
        assert_extracted(
            "Senior engineer with 3 years of experience",
            "3+ years",
            Some(3),
            None,
        );
    }

    #[test]
    fn test_range_beats_plus() {
        assert_extracted("2 to 6 years experience", "2-6 years", Some(2), Some(6));
    }

    #[test]
    fn test_level_order_first_match_wins() {
        // "fresher" precedes "graduate" in the rule table.
        assert_extracted("fresher graduate program", "Fresher", Some(0), Some(1));
    }

    #[test]
    fn test_match_score_unknown() {
        assert_eq!(match_score(None, None, 0, 10, true), 5);
        assert_eq!(match_score(None, None, 0, 10, false), 0);
    }

    #[test]
    fn test_match_score_partial_overlap() {
        // Overlap [3,5] length 3, min(job=4, filter=5)=4, ratio 0.75 -> 7.
        assert_eq!(match_score(Some(2), Some(5), 3, 7, true), 7);
    }

    #[test]
    fn test_match_score_full_containment() {
        assert_eq!(match_score(Some(3), Some(5), 0, 10, true), 10);
    }

    #[test]
    fn test_match_score_near_miss_and_far_miss() {
        // Gap of 2 years between [0,1] and [3,7].
        assert_eq!(match_score(Some(0), Some(1), 3, 7, true), 3);
        // Gap of 4 years.
        assert_eq!(match_score(Some(0), Some(1), 5, 9, true), 0);
        // Job range above the filter range.
        assert_eq!(match_score(Some(12), Some(15), 0, 10, true), 3);
        assert_eq!(match_score(Some(15), Some(20), 0, 10, true), 0);
    }

    #[test]
    fn test_match_score_missing_bounds_normalized() {
        // Missing max becomes min + 5: [5,10] against [5,10] is exact.
        assert_eq!(match_score(Some(5), None, 5, 10, true), 10);
        // Missing min becomes 0.
        assert_eq!(match_score(None, Some(2), 0, 2, true), 10);
    }

    #[test]
    fn test_match_score_extreme_bounds() {
        // An absurd lower bound extracted from text is a far miss, not a panic.
        assert_eq!(match_score(Some(i32::MAX), None, 0, 10, true), 0);
        // An absurd upper bound still overlaps the whole filter range.
        assert_eq!(match_score(Some(0), Some(i32::MAX), 0, 10, true), 10);
        assert_eq!(match_score(Some(i32::MAX), Some(i32::MAX), 0, 10, true), 0);
    }

    #[test]
    fn test_match_score_always_in_bounds() {
        for job_min in -1..12 {
            for job_max in job_min..14 {
                let score = match_score(Some(job_min), Some(job_max), 2, 6, true);
                assert!((0..=10).contains(&score), "score {} out of bounds", score);
            }
        }
    }
}
