//! Jurisdiction and court-level name resolution.
//!
//! Both lookups are case-insensitive on the code and fall back to returning
//! the input unchanged, so a value that is already a display name (or a code
//! CanLII introduced after these tables were written) passes through.

use std::{collections::HashMap, sync::LazyLock};

mod tables;

static JURISDICTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| tables::JURISDICTIONS.iter().copied().collect());

static COURT_LEVELS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| tables::COURT_LEVELS.iter().copied().collect());

/// Resolves a jurisdiction code (e.g. `sk`) to its display name
/// (e.g. `Saskatchewan`).
#[must_use]
pub fn jurisdiction_name(code: &str) -> &str {
    resolve(&JURISDICTIONS, code)
}

/// Resolves a court-level code (e.g. `skca`) to its display name
/// (e.g. `Court of Appeal for Saskatchewan`).
#[must_use]
pub fn court_level_name(code: &str) -> &str {
    resolve(&COURT_LEVELS, code)
}

fn resolve<'a>(table: &HashMap<&'static str, &'static str>, code: &'a str) -> &'a str {
    let key = code.trim().to_lowercase();
    table.get(key.as_str()).copied().unwrap_or(code)
}
