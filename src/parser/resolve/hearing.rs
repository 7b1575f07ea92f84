//! Hearing dates and the kind of proceeding they belong to.

use crate::{domain::MetadataRecord, parser::extract_dates};

/// A hearing field name and the case type it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HearingKey {
    /// Field name, lower-cased.
    pub key: &'static str,
    /// Value recorded under `case type` when this field is the one used.
    pub case_type: &'static str,
}

/// Output field holding the extracted `YYYY-MM-DD` dates.
pub const CASE_HEARD: &str = "case heard";
/// Output field holding the case type.
pub const CASE_TYPE: &str = "case type";

/// Extracts hearing dates from the first field of `table` present in the
/// record.
///
/// The source field is left in place. When none of the fields is present,
/// nothing is added.
pub fn resolve(record: &mut MetadataRecord, table: &[HearingKey]) {
    let Some((dates, case_type)) = table.iter().find_map(|entry| {
        record
            .text(entry.key)
            .map(|value| (extract_dates(value), entry.case_type))
    }) else {
        return;
    };
    record.insert(CASE_HEARD, dates);
    record.insert(CASE_TYPE, case_type);
}
