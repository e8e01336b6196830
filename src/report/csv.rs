//! CSV export of journal candidates.

use std::collections::BTreeSet;

/// Render journal candidates as a single-column CSV under a `Journal`
/// header, one row per name, in set order. Callers handle the no-journals
/// case; an empty set here renders a header-only file.
pub fn journals_csv(journals: &BTreeSet<String>) -> String {
    let mut out = String::from("Journal\n");
    for journal in journals {
        out.push_str(&csv_field(journal));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains a comma, quote, or line break; double
/// any embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
