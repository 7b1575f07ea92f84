//! Authorship of the reasons: who wrote, concurred and dissented.

use crate::domain::MetadataRecord;

/// Maps a header phrase such as `"written reasons by"` to the role its
/// judges are recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpinionRole {
    /// Field name, lower-cased, as it appears in the header.
    pub phrase: &'static str,
    /// Role attached to every judge named in the field.
    pub role: &'static str,
}

/// Tables driving opinion resolution for one rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpinionRules {
    /// Phrases to look for, each resolved independently.
    pub roles: &'static [OpinionRole],
    /// Judicial titles removed from each name (`"Mr. Justice"`, ...).
    pub titles: &'static [&'static str],
    /// Whether a stray conjunction ("and") left between names is dropped.
    pub drop_conjunction: bool,
}

const NAME_MARKER: &str = "The Honourable ";

/// Resolves every configured opinion phrase into `(judge, role)` pairs.
///
/// A phrase absent from the header still yields an empty list, so consumers
/// can rely on the field existing.
pub fn resolve(record: &mut MetadataRecord, rules: &OpinionRules) {
    for OpinionRole { phrase, role } in rules.roles {
        let pairs = record
            .take_text(phrase)
            .map(|value| {
                judges(&value, rules)
                    .into_iter()
                    .map(|judge| (judge, (*role).to_string()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        record.insert(phrase, pairs);
    }
}

/// Splits an opinion field into judge names on each "The Honourable ".
fn judges(value: &str, rules: &OpinionRules) -> Vec<String> {
    value
        .split(NAME_MARKER)
        .map(|fragment| {
            let mut name = fragment.to_string();
            for title in rules.titles {
                name = name.replace(title, "");
            }
            name.split_whitespace()
                .filter(|word| !(rules.drop_conjunction && *word == "and"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|name| !name.is_empty())
        .collect()
}
