use std::collections::{btree_map, BTreeMap};

use serde::Serialize;

/// A single field value in a [`MetadataRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag, such as `case_info_available`.
    Flag(bool),
    /// A scalar string.
    Text(String),
    /// An ordered list of strings.
    List(Vec<String>),
    /// An ordered list of `(name, role)` pairs.
    Roles(Vec<(String, String)>),
    /// An ordered list of `(lawyer(s), represented parties)` pairs.
    Counsel(Vec<(String, Vec<String>)>),
}

impl Value {
    /// Returns the string if this is a [`Value::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the items if this is a [`Value::List`].
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the pairs if this is a [`Value::Roles`].
    #[must_use]
    pub fn as_roles(&self) -> Option<&[(String, String)]> {
        match self {
            Self::Roles(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Returns the pairs if this is a [`Value::Counsel`].
    #[must_use]
    pub fn as_counsel(&self) -> Option<&[(String, Vec<String>)]> {
        match self {
            Self::Counsel(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Returns the flag if this is a [`Value::Flag`].
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Whether the value carries no content (an empty string or list).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flag(_) => false,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Roles(pairs) => pairs.is_empty(),
            Self::Counsel(pairs) => pairs.is_empty(),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<(String, String)>> for Value {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Roles(pairs)
    }
}

impl From<Vec<(String, Vec<String>)>> for Value {
    fn from(pairs: Vec<(String, Vec<String>)>) -> Self {
        Self::Counsel(pairs)
    }
}

/// The canonical key-value record produced for one court decision.
///
/// Field names are case-insensitive: they are lower-cased on the way in and on
/// lookup. No field is guaranteed to be present, so every accessor returns an
/// `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    fields: BTreeMap<String, Value>,
}

impl MetadataRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any previous value under the same name.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_lowercase(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(&key.to_lowercase())
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(&key.to_lowercase())
    }

    /// Whether a field named `key` exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(&key.to_lowercase())
    }

    /// Returns the field as a string, if it is a scalar.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Returns the field as a list of strings.
    #[must_use]
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(Value::as_list)
    }

    /// Returns the field as `(name, role)` pairs.
    #[must_use]
    pub fn roles(&self, key: &str) -> Option<&[(String, String)]> {
        self.get(key).and_then(Value::as_roles)
    }

    /// Returns the field as `(lawyer(s), parties)` pairs.
    #[must_use]
    pub fn counsel(&self, key: &str) -> Option<&[(String, Vec<String>)]> {
        self.get(key).and_then(Value::as_counsel)
    }

    /// Returns the field as a boolean flag.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_flag)
    }

    /// Removes a scalar field and hands back its string so that a resolver
    /// can replace it with a structured value.
    ///
    /// Non-scalar values are left in place.
    pub fn take_text(&mut self, key: &str) -> Option<String> {
        let key = key.to_lowercase();
        match self.fields.remove(&key)? {
            Value::Text(text) => Some(text),
            other => {
                self.fields.insert(key, other);
                None
            }
        }
    }

    /// Copies every field of `other` whose name is not already present.
    pub fn merge_missing(&mut self, other: Self) {
        for (key, value) in other.fields {
            self.fields.entry(key).or_insert(value);
        }
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a MetadataRecord {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_case_insensitive() {
        let mut record = MetadataRecord::new();
        record.insert("File Number", "CACV1234");

        assert!(record.contains("file number"));
        assert_eq!(record.text("FILE NUMBER"), Some("CACV1234"));
        assert_eq!(record.iter().next().unwrap().0, "file number");
    }

    #[test]
    fn typed_accessors_reject_other_shapes() {
        let mut record = MetadataRecord::new();
        record.insert("before", vec!["Smith".to_string()]);

        assert_eq!(record.text("before"), None);
        assert_eq!(record.list("before"), Some(&["Smith".to_string()][..]));
        assert_eq!(record.roles("before"), None);
    }

    #[test]
    fn take_text_leaves_structured_values() {
        let mut record = MetadataRecord::new();
        record.insert("before", vec!["Smith".to_string()]);
        record.insert("between", "A And B");

        assert_eq!(record.take_text("before"), None);
        assert!(record.contains("before"));
        assert_eq!(record.take_text("between").as_deref(), Some("A And B"));
        assert!(!record.contains("between"));
    }

    #[test]
    fn merge_missing_keeps_existing_fields() {
        let mut record = MetadataRecord::new();
        record.insert("citation", "2020 SKCA 1");

        let mut other = MetadataRecord::new();
        other.insert("citation", "something else");
        other.insert("before", vec!["Smith".to_string()]);

        record.merge_missing(other);

        assert_eq!(record.text("citation"), Some("2020 SKCA 1"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn serializes_as_a_flat_map() {
        let mut record = MetadataRecord::new();
        record.insert("case_info_available", false);
        record.insert(
            "counsel",
            vec![("Jane Doe".to_string(), vec!["Appellant".to_string()])],
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "case_info_available": false,
                "counsel": [["Jane Doe", ["Appellant"]]],
            })
        );
    }
}
