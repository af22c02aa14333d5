/// Scans posting text for the configured skill vocabulary.
///
/// Pure substring containment against the lower-cased text; vocabulary
/// entries are assumed already lower-cased (see `FilterConfig::normalized`).
/// The returned list preserves vocabulary order, not the order skills appear
/// in the text, and the skill score is its length.
pub fn scan(text: &str, vocabulary: &[String]) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|skill| haystack.contains(skill.as_str()))
        .cloned()
        .collect()
}
