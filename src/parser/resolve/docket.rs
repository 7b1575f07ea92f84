//! Court file numbers and the civil/criminal classification they carry.

use crate::domain::MetadataRecord;

use super::split_entries;

/// Output field for the civil/criminal classification.
pub const FIELD_KIND: &str = "field";

const PREFIXES: &[(&str, &str)] = &[("CACV", "civil"), ("CACR", "criminal")];

/// Splits each docket field in `keys` into a list of file numbers and
/// classifies the proceeding from their prefixes.
///
/// File numbers are examined in order; each recognised prefix overwrites the
/// classification, so the last recognised number decides. No `field` is
/// recorded when none is recognised.
pub fn resolve(record: &mut MetadataRecord, keys: &[&str]) {
    for key in keys {
        let Some(value) = record.take_text(key) else {
            continue;
        };
        let numbers = split_entries(&value);
        if let Some(kind) = classify(&numbers) {
            record.insert(FIELD_KIND, kind);
        }
        record.insert(key, numbers);
    }
}

fn classify(numbers: &[String]) -> Option<&'static str> {
    numbers.iter().rev().find_map(|number| {
        PREFIXES
            .iter()
            .find(|(prefix, _)| number.starts_with(prefix))
            .map(|(_, kind)| *kind)
    })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("CACV3322", Some("civil"); "civil")]
    #[test_case("CACR3100", Some("criminal"); "criminal")]
    #[test_case("CACV1; CACR2", Some("criminal"); "last prefix wins")]
    #[test_case("QBG 12/20", None; "unrecognised")]
    fn docket_is_classified(value: &str, expected: Option<&str>) {
        let mut record = MetadataRecord::new();
        record.insert("file number", value);
        resolve(&mut record, &["file number"]);

        assert_eq!(record.text(FIELD_KIND), expected);
        assert!(record.list("file number").is_some());
    }

    #[test]
    fn multiple_numbers_become_a_list() {
        let mut record = MetadataRecord::new();
        record.insert("file number", "CACV1; CACV2");
        resolve(&mut record, &["file number"]);

        assert_eq!(
            record.list("file number"),
            Some(&["CACV1".to_string(), "CACV2".to_string()][..])
        );
    }

    #[test]
    fn every_configured_key_is_resolved() {
        let mut record = MetadataRecord::new();
        record.insert("docket", "CACR1");
        resolve(&mut record, &["docket", "file number"]);

        assert_eq!(record.list("docket"), Some(&["CACR1".to_string()][..]));
        assert_eq!(record.text(FIELD_KIND), Some("criminal"));
        assert!(!record.contains("file number"));
    }
}
