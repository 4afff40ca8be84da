//! Backend record identifiers.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Backend identifier. Arrives as either a JSON string or a number and is
/// kept as its string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an already-stringified id.
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    /// The id as it appears in URLs and labels.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the backend sent no usable id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Up to two leading characters, upper-cased, for avatar badges.
    pub fn initials(&self) -> String {
        self.0.chars().take(2).collect::<String>().to_uppercase()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
            Null(()),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Ok(RecordId(text)),
            Raw::Int(value) => Ok(RecordId(value.to_string())),
            Raw::Float(value) if value.is_finite() => Ok(RecordId(value.to_string())),
            Raw::Float(_) => Err(de::Error::custom("id must be a finite number")),
            Raw::Null(()) => Ok(RecordId::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::RecordId;

    #[test]
    fn accepts_strings_and_numbers() {
        let from_text: RecordId = serde_json::from_value(json!("p1")).unwrap();
        let from_int: RecordId = serde_json::from_value(json!(42)).unwrap();
        let from_null: RecordId = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(from_text.as_str(), "p1");
        assert_eq!(from_int.as_str(), "42");
        assert!(from_null.is_empty());
    }

    #[test]
    fn rejects_objects() {
        assert!(serde_json::from_value::<RecordId>(json!({ "id": 1 })).is_err());
    }

    #[test]
    fn initials_are_two_upper_chars() {
        assert_eq!(RecordId::from("abc123").initials(), "AB");
        assert_eq!(RecordId::from("x").initials(), "X");
    }
}
