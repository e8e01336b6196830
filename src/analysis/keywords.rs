//! Generic keyword containment matching.

/// Return the keywords present in `text`, as case-insensitive substrings.
///
/// Results preserve keyword-list order (not order of appearance in the
/// text) and never contain duplicates. Matching is plain containment with
/// no word-boundary enforcement, so "regression" also matches inside
/// "autoregressive".
pub fn find_keywords(text: &str, keywords: &[&str]) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for keyword in keywords {
        if found.iter().any(|f| f.as_str() == *keyword) {
            continue;
        }
        if haystack.contains(&keyword.to_lowercase()) {
            found.push((*keyword).to_string());
        }
    }
    found
}
