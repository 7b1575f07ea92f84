//! Resolver stages that turn segmented header fields into structured values.
//!
//! Every resolver takes the record being built and the immutable tables of
//! the rule set it runs under. A resolver whose input field is missing leaves
//! the record untouched (opinion roles are the one exception: they always
//! produce a possibly empty list). None of them fail.

use std::sync::LazyLock;

use regex::Regex;

pub mod bench;
pub mod counsel;
pub mod docket;
pub mod forum;
pub mod hearing;
pub mod opinions;
pub mod parties;

static NAME_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*|\s+and\s+").expect("name separator pattern is valid"));

/// Splits a run of co-party names on commas and the word "and".
pub(crate) fn split_names(text: &str) -> Vec<String> {
    NAME_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Finds the earliest role keyword in `text`, returning its byte position
/// and the keyword.
///
/// When two keywords start at the same position the one listed first is
/// returned, so role tables list longer forms ("Appellants") before their
/// prefixes ("Appellant").
pub(crate) fn find_role<'r>(text: &str, roles: &[&'r str]) -> Option<(usize, &'r str)> {
    roles
        .iter()
        .filter_map(|role| text.find(role).map(|position| (position, *role)))
        .min_by_key(|(position, _)| *position)
}

/// Splits a `"; "`-separated field into trimmed, non-empty entries.
pub(crate) fn split_entries(text: &str) -> Vec<String> {
    text.split("; ")
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
