//! Reference-year recency histogram.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Plausible publication years, 1970 through 2035, as standalone 4-digit
/// tokens. Word bounds keep longer digit runs (DOIs, grant numbers) out.
static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19[7-9]\d|20[0-2]\d|203[0-5])\b").unwrap());

/// Trailing years, inclusive of the current one, that count as recent.
const RECENT_WINDOW: i32 = 5;

/// Count mentions of years inside the trailing five-year window.
///
/// Keys always satisfy `current_year - 5 <= year <= current_year`; years
/// after `current_year` never appear even though the token pattern admits
/// them. Any in-window 4-digit token counts, including page numbers or
/// sample sizes that happen to look like years.
pub fn recent_year_histogram(text: &str, current_year: i32) -> BTreeMap<i32, usize> {
    let mut histogram = BTreeMap::new();
    for token in YEAR_REGEX.find_iter(text) {
        let Ok(year) = token.as_str().parse::<i32>() else {
            continue;
        };
        if year >= current_year - RECENT_WINDOW && year <= current_year {
            *histogram.entry(year).or_insert(0) += 1;
        }
    }
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_window_years() {
        let text = "Smith (2023) extends Jones (2021); see also 2023 data.";
        let histogram = recent_year_histogram(text, 2024);
        assert_eq!(histogram.get(&2023), Some(&2));
        assert_eq!(histogram.get(&2021), Some(&1));
        assert_eq!(histogram.len(), 2);
    }

    #[test]
    fn window_is_inclusive_on_both_edges() {
        let text = "From 2019 through 2024.";
        let histogram = recent_year_histogram(text, 2024);
        assert_eq!(histogram.get(&2019), Some(&1));
        assert_eq!(histogram.get(&2024), Some(&1));
    }

    #[test]
    fn years_outside_the_window_are_ignored() {
        let text = "Classic work from 1991 and 2015; forthcoming in 2027.";
        assert!(recent_year_histogram(text, 2024).is_empty());
    }

    #[test]
    fn future_years_never_appear() {
        // 2025 is a plausible token but lies past the evaluation year.
        let histogram = recent_year_histogram("In press, 2025.", 2024);
        assert!(histogram.is_empty());
    }

    #[test]
    fn digit_runs_longer_than_a_year_do_not_match() {
        let text = "doi:10.1016/j.jfe.20231104; isbn 9782023110000";
        assert!(recent_year_histogram(text, 2024).is_empty());
    }

    #[test]
    fn keys_come_out_sorted_ascending() {
        let text = "2020 2022 2021 2022";
        let years: Vec<i32> = recent_year_histogram(text, 2024).into_keys().collect();
        assert_eq!(years, vec![2020, 2021, 2022]);
    }
}
