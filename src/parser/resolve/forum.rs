//! Disposition and the forum a case came up from.

use crate::domain::MetadataRecord;

use super::split_entries;

const DISPOSITION: &str = "disposition";

/// Splits the disposition into its `"; "`-separated parts.
pub fn resolve_disposition(record: &mut MetadataRecord) {
    if let Some(value) = record.take_text(DISPOSITION) {
        record.insert(DISPOSITION, split_entries(&value));
    }
}

/// Turns each forum field in `keys` into exactly two items.
///
/// The value is split on `", "`; when there are more than two parts all but
/// the last are joined back into the first item. `infix` (such as the
/// `"J.C. of "` judicial-centre prefix) is removed from the second item.
/// Missing parts are padded with empty strings.
pub fn resolve_forum(record: &mut MetadataRecord, keys: &[&str], infix: &str) {
    for key in keys {
        if let Some(value) = record.take_text(key) {
            record.insert(key, forum_pair(&value, infix));
        }
    }
}

fn forum_pair(value: &str, infix: &str) -> Vec<String> {
    let (first, second) = value.rsplit_once(", ").unwrap_or((value, ""));
    let second = if infix.is_empty() {
        second.to_string()
    } else {
        second.replace(infix, "")
    };
    vec![first.trim().to_string(), second.trim().to_string()]
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("QBG 1234/15, J.C. of Regina", ["QBG 1234/15", "Regina"]; "typical")]
    #[test_case("Court of Queen's Bench, Judicial Centre of Saskatoon, 2019 SKQB 1", ["Court of Queen's Bench, Judicial Centre of Saskatoon", "2019 SKQB 1"]; "collapsed")]
    #[test_case("2019 SKQB 1", ["2019 SKQB 1", ""]; "padded")]
    #[test_case("", ["", ""]; "empty")]
    fn forum_has_two_items(value: &str, expected: [&str; 2]) {
        let mut record = MetadataRecord::new();
        record.insert("on appeal from", value);
        resolve_forum(&mut record, &["on appeal from", "on application from"], "J.C. of ");

        assert_eq!(record.list("on appeal from"), Some(&expected.map(String::from)[..]));
        assert!(!record.contains("on application from"));
    }

    #[test]
    fn disposition_is_split() {
        let mut record = MetadataRecord::new();
        record.insert("disposition", "Appeal allowed; Sentence varied");
        resolve_disposition(&mut record);

        assert_eq!(
            record.list("disposition"),
            Some(&["Appeal allowed".to_string(), "Sentence varied".to_string()][..])
        );
    }
}
