use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job advertisement flowing through the pipeline.
///
/// Sources deliver only the raw fields; the derived fields are written by the
/// ranking pipeline, each exactly once per posting, in stage order. A posting
/// dropped by the filter is never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    #[serde(default)]
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Raw relative-time string as scraped, e.g. "2 days ago".
    #[serde(default, alias = "posted")]
    pub posted_text: String,
    /// Canonical identity for deduplication. Empty links are never deduplicated.
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,

    // Derived fields, populated by the ranking pipeline.
    #[serde(default)]
    pub posting_instant: Option<DateTime<Utc>>,
    #[serde(default)]
    pub skills_found: Vec<String>,
    #[serde(default)]
    pub skill_score: usize,
    /// Raw experience label, empty when no requirement was recognized.
    #[serde(default)]
    pub experience_text: String,
    #[serde(default)]
    pub experience_min_years: Option<i32>,
    #[serde(default)]
    pub experience_max_years: Option<i32>,
    /// 0-10 overlap score against the configured acceptable range.
    #[serde(default)]
    pub experience_match_score: i32,
}

impl Posting {
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        posted_text: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            posted_text: posted_text.into(),
            link: link.into(),
            description: String::new(),
            posting_instant: None,
            skills_found: Vec::new(),
            skill_score: 0,
            experience_text: String::new(),
            experience_min_years: None,
            experience_max_years: None,
            experience_match_score: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// No experience requirement could be extracted from the posting text.
    pub fn is_experience_unknown(&self) -> bool {
        self.experience_min_years.is_none() && self.experience_max_years.is_none()
    }
}

/// Immutable filter configuration, supplied once per pipeline run.
///
/// Constructed explicitly by the caller; the core reads no ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Ordered lowercase skill vocabulary. Result lists preserve this order.
    pub preferred_skills: Vec<String>,
    pub min_skill_score: usize,
    pub experience_min_years: i32,
    pub experience_max_years: i32,
    /// Whether postings with no recognizable experience requirement pass the
    /// experience gate. Defaults to true: unparseable text fails open.
    pub include_unknown_experience: bool,
    /// Case-insensitive disqualifying keywords, e.g. "intern", "unpaid".
    pub exclude_keywords: Vec<String>,
    /// Informational recency window for callers and report headers; the
    /// pipeline itself does not enforce wall-clock recency.
    pub time_range_hours: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            preferred_skills: [
                "python",
                "tensorflow",
                "pytorch",
                "scikit-learn",
                "machine learning",
                "deep learning",
                "ai",
                "artificial intelligence",
            ]
            .map(String::from)
            .to_vec(),
            min_skill_score: 1,
            experience_min_years: 0,
            experience_max_years: 10,
            include_unknown_experience: true,
            exclude_keywords: Vec::new(),
            time_range_hours: 24,
        }
    }
}

impl FilterConfig {
    /// Lower-cases and trims the skill vocabulary and exclude keywords,
    /// dropping empty entries. Substring scans assume this normal form.
    pub fn normalized(mut self) -> Self {
        let clean = |items: Vec<String>| -> Vec<String> {
            items
                .into_iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };
        self.preferred_skills = clean(self.preferred_skills);
        self.exclude_keywords = clean(self.exclude_keywords);
        self
    }
}
