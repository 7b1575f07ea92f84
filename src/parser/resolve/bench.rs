//! The "Before:" field, naming the judges who heard the case.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::MetadataRecord;

const FIELD: &str = "before";

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*,\s*|\s*\band\b\s*").expect("bench separator pattern is valid")
});

/// Splits a bench line into judge surnames.
///
/// Each comma- or "and"-separated fragment is reduced to its first word and
/// tokens found in `honorifics` (bare "J.A.", "C.J.S." and the like) are
/// dropped.
#[must_use]
pub fn split_bench(value: &str, honorifics: &[&str]) -> Vec<String> {
    SEPARATOR
        .split(value)
        .filter_map(|fragment| fragment.split_whitespace().next())
        .filter(|name| !honorifics.contains(name))
        .map(str::to_string)
        .collect()
}

/// Replaces the textual bench with the list of judge surnames.
pub fn resolve(record: &mut MetadataRecord, honorifics: &[&str]) {
    if let Some(value) = record.take_text(FIELD) {
        record.insert(FIELD, split_bench(&value, honorifics));
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const HONORIFICS: &[&str] = &["J.A.", "JJ.A.", "C.J.S."];

    #[test_case("Ottenbreit, Caldwell and Leurer JJ.A.", &["Ottenbreit", "Caldwell", "Leurer"]; "typical panel")]
    #[test_case("Richards C.J.S., Jackson AND Whitmore JJ.A.", &["Richards", "Jackson", "Whitmore"]; "chief justice")]
    #[test_case("Smith, J.A.", &["Smith"]; "bare honorific dropped")]
    #[test_case("Anderson J.A.", &["Anderson"]; "and inside a name")]
    #[test_case("", &[]; "empty")]
    fn bench_is_split(value: &str, expected: &[&str]) {
        assert_eq!(split_bench(value, HONORIFICS), expected);
    }

    #[test]
    fn without_honorific_filter_titles_survive() {
        assert_eq!(split_bench("Smith, J.A.", &[]), vec!["Smith", "J.A."]);
    }

    #[test]
    fn record_field_becomes_a_list() {
        let mut record = MetadataRecord::new();
        record.insert("before", "Smith and Jones JJ.A.");
        resolve(&mut record, HONORIFICS);
        assert_eq!(
            record.list("before"),
            Some(&["Smith".to_string(), "Jones".to_string()][..])
        );
    }

    #[test]
    fn missing_field_is_left_alone() {
        let mut record = MetadataRecord::new();
        resolve(&mut record, HONORIFICS);
        assert!(record.is_empty());
    }
}
