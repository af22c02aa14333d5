use crate::domain::model::Posting;
use std::collections::HashSet;

/// Collapses postings sharing a link across sources and queries, keeping the
/// first-seen occurrence and the original order.
///
/// Keys are exact link strings, no URL normalization. Postings with an empty
/// link are never deduplicated against each other; callers wanting strict
/// uniqueness must drop those upstream.
pub fn dedupe(postings: Vec<Posting>) -> Vec<Posting> {
    let mut seen: HashSet<String> = HashSet::new();
    postings
        .into_iter()
        .filter(|posting| posting.link.is_empty() || seen.insert(posting.link.clone()))
        .collect()
}
