//! Metadata every CanLII decision page carries, read straight from the HTML.
//!
//! CanLII embeds `<meta name="lbh-*" content="...">` tags with the style of
//! cause, citation, dates and classification, plus two hidden lists of the
//! cases and legislation the decision cites. None of this depends on the
//! court or era, so it is extracted before any rule set runs.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;
use tracing::debug;

use crate::{
    domain::{
        citation::primary_key_from_url,
        links::{render_case_links, render_legislation_links, MISSING_LINK},
        Citation, MetadataRecord,
    },
    lookup::{court_level_name, jurisdiction_name},
};

static META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta name="lbh-([a-z-]+)" content="([^"]+)""#).expect("meta pattern is valid")
});

static CASE_LINKS: LazyLock<Regex> = LazyLock::new(|| links_container("judgmentLinks"));

static LEGISLATION_LINKS: LazyLock<Regex> =
    LazyLock::new(|| links_container("legislationLinks"));

static DATA_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<li\b[^>]*\bdata-path\s*=\s*"([^"]*)""#).expect("data-path pattern is valid")
});

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"—|\|").expect("list separator pattern is valid"));

fn links_container(id: &str) -> Regex {
    Regex::new(&format!(
        r#"(?is)<div\b[^>]*\bid\s*=\s*"{id}"[^>]*>(.*?)</div>"#
    ))
    .expect("links container pattern is valid")
}

/// Meta fields that must all be present for the case information to count
/// as available.
const REQUIRED: [&str; 6] = [
    "title",
    "citation",
    "decision-date",
    "document-url",
    "collection",
    "jurisdiction",
];

/// Links pointing at these paths are excluded.
const EXCLUDED_PATH: &str = "reflex";

const NONE: &str = "None";

/// Extracts the court-independent metadata from a decision page.
///
/// Always sets `case_info_available`, `language`, `case_links` and
/// `legislation_links`, plus either `keywords_list` or `keywords = "None"` and
/// either `subjects_list` or `subjects = "None"`. The case information fields
/// (`style_of_cause`, `citation`, `decision_year`, `decision_date`, `url`,
/// `primary_key`, `court_level`, `jurisdiction`) are set only when every one
/// of their source tags is present.
#[must_use]
pub fn extract_general(html: &str, link_base_url: &str) -> MetadataRecord {
    let meta = meta_tags(html);
    let mut record = MetadataRecord::new();

    record.insert(
        "case_links",
        render_case_links(&link_paths(&CASE_LINKS, html), link_base_url),
    );
    let mut legislation = link_paths(&LEGISLATION_LINKS, html);
    dedup_in_order(&mut legislation);
    record.insert(
        "legislation_links",
        render_legislation_links(&legislation, link_base_url),
    );

    let available = REQUIRED.iter().all(|name| meta.contains_key(name));
    record.insert("case_info_available", available);
    if available {
        insert_case_info(&mut record, &meta);
    } else {
        debug!("case information tags incomplete");
    }

    let language = match meta.get("lang").copied() {
        Some("en") => "English",
        Some("fr") => "French",
        _ => NONE,
    };
    record.insert("language", language);

    match meta.get("keywords") {
        Some(keywords) => {
            let mut keywords = split_list(keywords);
            dedup_in_order(&mut keywords);
            record.insert("keywords_list", keywords);
        }
        None => record.insert("keywords", NONE),
    }

    match meta.get("subjects") {
        Some(subjects) => record.insert("subjects_list", split_list(subjects)),
        None => record.insert("subjects", NONE),
    }

    record
}

fn insert_case_info(record: &mut MetadataRecord, meta: &HashMap<&str, &str>) {
    let field = |name: &str| meta.get(name).copied().unwrap_or_default();

    let citation = Citation::new(field("citation"));
    let url = field("document-url");

    record.insert("style_of_cause", field("title"));
    record.insert("decision_year", citation.year().unwrap_or_default());
    record.insert("citation", citation.as_str());
    record.insert("decision_date", field("decision-date"));
    record.insert("url", url);
    record.insert("primary_key", primary_key_from_url(url));
    record.insert("court_level", court_level_name(field("collection")));
    record.insert("jurisdiction", jurisdiction_name(field("jurisdiction")));
}

/// Collects `lbh-*` meta tags; the first occurrence of a name wins.
fn meta_tags(html: &str) -> HashMap<&str, &str> {
    let mut tags = HashMap::new();
    for captures in META.captures_iter(html) {
        if let (Some(name), Some(content)) = (captures.get(1), captures.get(2)) {
            tags.entry(name.as_str()).or_insert(content.as_str());
        }
    }
    tags
}

/// Reads the `data-path` of every list item in a hidden links container.
///
/// A page without the container yields a single [`MISSING_LINK`] entry.
fn link_paths(container: &Regex, html: &str) -> Vec<String> {
    let Some(body) = container.captures(html).and_then(|captures| captures.get(1)) else {
        return vec![MISSING_LINK.to_string()];
    };
    DATA_PATH
        .captures_iter(body.as_str())
        .filter_map(|captures| captures.get(1))
        .map(|path| path.as_str())
        .filter(|path| !path.contains(EXCLUDED_PATH))
        .map(str::to_string)
        .collect()
}

fn split_list(value: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(value)
        .map(|item| item.trim().to_string())
        .collect()
}

fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}
