//! The "Between:" field listing the parties to the proceeding.

use crate::domain::MetadataRecord;

use super::{find_role, split_names};

const FIELD: &str = "between";

/// Separator between the blocks of the "Between:" field.
const BLOCK_SEPARATOR: &str = "And ";

/// How the "Between:" field is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRules {
    /// Each block is split into party names and a procedural role found from
    /// the table, yielding `(name, role)` pairs.
    Roles(&'static [&'static str]),
    /// Blocks are kept as plain strings.
    Plain,
}

/// Resolves the "Between:" field according to `rules`.
pub fn resolve(record: &mut MetadataRecord, rules: PartyRules) {
    let Some(value) = record.take_text(FIELD) else {
        return;
    };
    let blocks = value.split(BLOCK_SEPARATOR);

    match rules {
        PartyRules::Plain => {
            let blocks: Vec<String> = blocks
                .map(str::trim)
                .filter(|block| !block.is_empty())
                .map(str::to_string)
                .collect();
            record.insert(FIELD, blocks);
        }
        PartyRules::Roles(roles) => {
            let mut parties: Vec<(String, String)> = Vec::new();
            for block in blocks {
                for party in block_parties(block, roles) {
                    if !parties.contains(&party) {
                        parties.push(party);
                    }
                }
            }
            record.insert(FIELD, parties);
        }
    }
}

/// Reads one block such as `"John Smith and Jane Smith Appellants"`.
///
/// The text before the earliest role keyword holds the names; the keyword
/// itself is the role. A block without any known role yields its names with
/// an empty role.
fn block_parties(block: &str, roles: &[&str]) -> Vec<(String, String)> {
    let block = block.replace('_', "");
    let block = block.trim();
    if block.is_empty() {
        return Vec::new();
    }

    let (names, role) = find_role(block, roles)
        .map_or((block, ""), |(position, role)| (&block[..position], role));

    split_names(names)
        .into_iter()
        .map(|name| (name, role.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &[&str] = &[
        "Proposed Intervenors",
        "Proposed Intervenor",
        "Appellants",
        "Appellant",
        "Respondents",
        "Respondent",
        "Intervenors",
        "Intervenor",
    ];

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(name, role)| ((*name).to_string(), (*role).to_string()))
            .collect()
    }

    fn resolved(value: &str, rules: PartyRules) -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record.insert("between", value);
        resolve(&mut record, rules);
        record
    }

    #[test]
    fn parties_and_roles_are_paired() {
        let record = resolved(
            "John Smith Appellant And Her Majesty the Queen Respondent",
            PartyRules::Roles(ROLES),
        );
        assert_eq!(
            record.roles("between"),
            Some(&pairs(&[("John Smith", "Appellant"), ("Her Majesty the Queen", "Respondent")])[..])
        );
    }

    #[test]
    fn co_parties_share_the_role() {
        let record = resolved(
            "Ann Lee, Bo Lee and Cy Lee Appellants And SGI Respondent",
            PartyRules::Roles(ROLES),
        );
        assert_eq!(
            record.roles("between"),
            Some(
                &pairs(&[
                    ("Ann Lee", "Appellants"),
                    ("Bo Lee", "Appellants"),
                    ("Cy Lee", "Appellants"),
                    ("SGI", "Respondent"),
                ])[..]
            )
        );
    }

    #[test]
    fn longer_role_wins_over_its_prefix() {
        let record = resolved(
            "Law Society Proposed Intervenor And X Respondent",
            PartyRules::Roles(ROLES),
        );
        assert_eq!(
            record.roles("between"),
            Some(&pairs(&[("Law Society", "Proposed Intervenor"), ("X", "Respondent")])[..])
        );
    }

    #[test]
    fn duplicates_are_dropped_and_underscores_removed() {
        let record = resolved(
            "A Appellant And ____ And A Appellant",
            PartyRules::Roles(ROLES),
        );
        assert_eq!(record.roles("between"), Some(&pairs(&[("A", "Appellant")])[..]));
    }

    #[test]
    fn unknown_role_leaves_it_empty() {
        let record = resolved("A Petitioner", PartyRules::Roles(ROLES));
        assert_eq!(record.roles("between"), Some(&pairs(&[("A Petitioner", "")])[..]));
    }

    #[test]
    fn plain_rules_keep_blocks() {
        let record = resolved("A Appellant And B Respondent", PartyRules::Plain);
        assert_eq!(
            record.list("between"),
            Some(&["A Appellant".to_string(), "B Respondent".to_string()][..])
        );
    }

    #[test]
    fn missing_field_is_left_alone() {
        let mut record = MetadataRecord::new();
        resolve(&mut record, PartyRules::Roles(ROLES));
        assert!(!record.contains("between"));
    }
}
