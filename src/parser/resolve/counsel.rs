//! The "Counsel:" field: who appeared and for whom.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::domain::MetadataRecord;

use super::{find_role, split_names};

const FIELD: &str = "counsel";

/// Entry separator produced by the paired rule set's counsel joiner.
const ENTRY_SEPARATOR: &str = "; ";

const SELF_REPRESENTED: &str = "Self-represented";

static OWN_BEHALF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),?\s*\b(?:appearing\s+)?on\s+(?:his|her|their)\s+(?:own\s+)?behalf\b")
        .expect("own behalf pattern is valid")
});

static FOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bfor\b").expect("for pattern is valid"));

/// How the "Counsel:" field is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounselRules {
    /// Entries of the form "Lawyer for the Party" become
    /// `(lawyer, [parties])` pairs.
    Paired {
        /// Procedural roles used to tell the party side from the lawyer side.
        roles: &'static [&'static str],
        /// Phrases (post-nominals and the like) removed from each fragment.
        cleanup: &'static [&'static str],
    },
    /// The text is cut at the delimiter words, keeping them, into one flat
    /// list of lawyers and parties.
    Flat {
        /// Words the text is cut at, matched case-insensitively.
        delimiters: &'static [&'static str],
        /// Phrases removed from each item.
        cleanup: &'static [&'static str],
    },
}

/// Resolves the "Counsel:" field according to `rules`.
pub fn resolve(record: &mut MetadataRecord, rules: CounselRules) {
    let Some(value) = record.take_text(FIELD) else {
        return;
    };

    match rules {
        CounselRules::Paired { roles, cleanup } => {
            let fragments: Vec<String> = value
                .split(ENTRY_SEPARATOR)
                .flat_map(|entry| entry_fragments(entry, roles, cleanup))
                .filter(|fragment| !fragment.is_empty())
                .collect();
            record.insert(FIELD, pair_counsel(&fragments));
        }
        CounselRules::Flat {
            delimiters,
            cleanup,
        } => match flat_counsel(&value, delimiters, cleanup) {
            Some(items) => record.insert(FIELD, items),
            None => record.insert(FIELD, value),
        },
    }
}

/// Pairs consecutive fragments as `(lawyer, parties)`.
///
/// The party fragment is split into co-parties on commas and "and". A
/// trailing fragment without a partner is dropped.
#[must_use]
pub fn pair_counsel(fragments: &[String]) -> Vec<(String, Vec<String>)> {
    let chunks = fragments.chunks_exact(2);
    if let [orphan] = chunks.remainder() {
        debug!(fragment = %orphan, "dropping counsel fragment without a partner");
    }
    chunks
        .map(|pair| (pair[0].clone(), split_names(&pair[1])))
        .collect()
}

/// Breaks one counsel entry into `[lawyer, party]` fragments.
///
/// The lawyer always comes first, whichever order the entry was written in.
/// An entry without "for" is cut at its earliest role keyword, the keyword
/// starting the party side. An entry with neither yields a single fragment,
/// which then pairs with its neighbour.
fn entry_fragments(entry: &str, roles: &[&str], cleanup: &[&str]) -> Vec<String> {
    if let Some(found) = OWN_BEHALF.find(entry) {
        return vec![
            clean(&entry[..found.start()], cleanup),
            SELF_REPRESENTED.to_string(),
        ];
    }

    let Some(found) = FOR.find(entry) else {
        return match find_role(entry, roles) {
            Some((position, _)) => vec![
                clean(&entry[..position], cleanup),
                clean(&entry[position..], cleanup),
            ],
            None => vec![clean(entry, cleanup)],
        };
    };
    let (left, right) = (&entry[..found.start()], &entry[found.end()..]);
    let party_first = find_role(left, roles).is_some() && find_role(right, roles).is_none();
    let (lawyer, party) = if party_first {
        (right, left)
    } else {
        (left, right)
    };
    vec![clean(lawyer, cleanup), clean(party, cleanup)]
}

fn flat_counsel(value: &str, delimiters: &[&str], cleanup: &[&str]) -> Option<Vec<String>> {
    let alternatives = delimiters
        .iter()
        .map(|delimiter| regex::escape(delimiter))
        .collect::<Vec<_>>()
        .join("|");
    let splitter = match Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")) {
        Ok(splitter) => splitter,
        Err(error) => {
            warn!(%error, "invalid counsel delimiter table, keeping raw counsel text");
            return None;
        }
    };

    let mut pieces = Vec::new();
    let mut last = 0;
    for found in splitter.find_iter(value) {
        pieces.push(&value[last..found.start()]);
        pieces.push(found.as_str());
        last = found.end();
    }
    pieces.push(&value[last..]);

    let items = pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.eq_ignore_ascii_case("for") && !piece.eq_ignore_ascii_case("the"))
        .map(|piece| {
            if piece.eq_ignore_ascii_case("own behalf") {
                SELF_REPRESENTED.to_lowercase()
            } else {
                clean(piece, cleanup)
            }
        })
        .filter(|item| !item.is_empty())
        .collect();
    Some(items)
}

/// Removes cleanup phrases, a leading article and stray commas.
fn clean(fragment: &str, cleanup: &[&str]) -> String {
    let mut text = fragment.to_string();
    for phrase in cleanup {
        text = text.replace(phrase, "");
    }
    let text = text.trim().trim_matches(',').trim();
    let text = ["the ", "The "]
        .iter()
        .find_map(|article| text.strip_prefix(article))
        .unwrap_or(text);
    text.trim().to_string()
}
