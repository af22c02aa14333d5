use crate::core::{dedup, experience, posted_time, skills};
use crate::domain::model::{FilterConfig, Posting};
use chrono::{DateTime, Utc};

/// Titles matching any of these pass the skill gate even with a zero skill
/// score. The override never touches the experience gate.
const TITLE_FALLBACK_KEYWORDS: [&str; 3] = ["ml", "machine learning", "ai"];

/// The filter/rank decision function over a batch of postings.
///
/// Stateless across runs: the output is a pure function of the batch, `now`
/// and the configuration, plus diagnostic logging that is not part of the
/// contract. Stages run in a fixed order: dedupe, per-posting enrichment,
/// filter, stable sort. No truncation; callers apply any top-N limit.
pub struct RankingPipeline {
    filter: FilterConfig,
}

impl RankingPipeline {
    pub fn new(filter: FilterConfig) -> Self {
        Self {
            filter: filter.normalized(),
        }
    }

    pub fn run(&self, postings: Vec<Posting>, now: DateTime<Utc>) -> Vec<Posting> {
        let total = postings.len();
        let mut postings = dedup::dedupe(postings);
        tracing::debug!("Deduplicated {} -> {} postings", total, postings.len());

        for posting in &mut postings {
            self.enrich(posting, now);
        }

        postings.retain_mut(|posting| self.passes_filter(posting));
        tracing::debug!("{} postings retained after filtering", postings.len());

        // Highest experience match first, ties by highest skill score, then
        // earliest instant; a missing instant sorts first within its ties.
        postings.sort_by(|a, b| {
            b.experience_match_score
                .cmp(&a.experience_match_score)
                .then(b.skill_score.cmp(&a.skill_score))
                .then(a.posting_instant.cmp(&b.posting_instant))
        });

        postings
    }

    /// Populates the derived fields, each exactly once, in stage order.
    fn enrich(&self, posting: &mut Posting, now: DateTime<Utc>) {
        posting.posting_instant = Some(posted_time::normalize(&posting.posted_text, now));

        let text = format!("{} {}", posting.title, posting.description);
        posting.skills_found = skills::scan(&text, &self.filter.preferred_skills);
        posting.skill_score = posting.skills_found.len();

        // A source may deliver a pre-extracted requirement; keep it.
        if posting.experience_text.is_empty() {
            let requirement = experience::extract(&text);
            posting.experience_text = requirement.label;
            posting.experience_min_years = requirement.min_years;
            posting.experience_max_years = requirement.max_years;
        }
    }

    /// Both gates are evaluated independently; the title fallback overrides
    /// only the skill gate.
    fn passes_filter(&self, posting: &mut Posting) -> bool {
        let experience_ok = self.experience_gate(posting);

        let mut skills_ok = posting.skill_score >= self.filter.min_skill_score;
        if !skills_ok {
            let title = posting.title.to_lowercase();
            if TITLE_FALLBACK_KEYWORDS.iter().any(|kw| title.contains(kw)) {
                tracing::debug!("Title fallback retains '{}'", posting.title);
                skills_ok = true;
            }
        }

        if !(experience_ok && skills_ok) {
            tracing::debug!(
                "Dropped '{}' (experience_ok={}, skills_ok={})",
                posting.title,
                experience_ok,
                skills_ok
            );
            return false;
        }
        true
    }

    fn experience_gate(&self, posting: &mut Posting) -> bool {
        if posting.is_experience_unknown() {
            // The matcher also consults the unknown flag; both checks are
            // kept deliberately even though they usually agree.
            posting.experience_match_score = experience::match_score(
                None,
                None,
                self.filter.experience_min_years,
                self.filter.experience_max_years,
                self.filter.include_unknown_experience,
            );
            return self.filter.include_unknown_experience;
        }

        let haystack = format!(
            "{} {} {}",
            posting.title, posting.description, posting.experience_text
        )
        .to_lowercase();
        if let Some(keyword) = self
            .filter
            .exclude_keywords
            .iter()
            .find(|kw| haystack.contains(kw.as_str()))
        {
            tracing::debug!("Excluded '{}' on keyword '{}'", posting.title, keyword);
            return false;
        }

        posting.experience_match_score = experience::match_score(
            posting.experience_min_years,
            posting.experience_max_years,
            self.filter.experience_min_years,
            self.filter.experience_max_years,
            self.filter.include_unknown_experience,
        );
        posting.experience_match_score > 0
    }
}
