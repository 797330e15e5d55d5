//! Rating data types and the `coffeeRatings` wire format
//!
//! In memory, ratings are a map from shop id to a [`RatingEntry`]. On the
//! wire they are a single flat JSON object where `"{id}"` holds the star
//! value as a number and `"{id}-note"` holds the note as a string:
//!
//! ```json
//! { "1": 4, "1-note": "Bold & balanced!", "3-note": "Try the cortado" }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::{RatingError, RatingResult};
use crate::shops::ShopId;

/// Suffix of the composite note key
const NOTE_SUFFIX: &str = "-note";

/// A star value, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> RatingResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::InvalidStars(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> u8 {
        stars.0
    }
}

impl std::fmt::Display for Stars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// A visitor's rating and note for one shop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Stars>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RatingEntry {
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.note.is_none()
    }
}

/// All rating entries, keyed by shop id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingBook {
    entries: BTreeMap<ShopId, RatingEntry>,
    /// Stored keys that are not a valid rating or note, written back as found
    unrecognized: Map<String, Value>,
}

impl RatingBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the star value, leaving any note untouched
    pub fn set_rating(&mut self, id: ShopId, stars: Stars) {
        self.entries.entry(id).or_default().rating = Some(stars);
    }

    /// Set the note, leaving any star value untouched
    pub fn set_note(&mut self, id: ShopId, note: impl Into<String>) {
        self.entries.entry(id).or_default().note = Some(note.into());
    }

    pub fn entry(&self, id: ShopId) -> Option<&RatingEntry> {
        self.entries.get(&id)
    }

    pub fn rating(&self, id: ShopId) -> Option<Stars> {
        self.entries.get(&id).and_then(|e| e.rating)
    }

    pub fn note(&self, id: ShopId) -> Option<&str> {
        self.entries.get(&id).and_then(|e| e.note.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShopId, &RatingEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.unrecognized.clear();
    }

    /// Encode as the flat `coffeeRatings` JSON object
    pub fn to_json_value(&self) -> Value {
        // Known entries win over an unrecognized value under the same key
        let mut map = self.unrecognized.clone();
        for (id, entry) in &self.entries {
            if let Some(stars) = entry.rating {
                map.insert(id.to_string(), Value::from(stars.get()));
            }
            if let Some(note) = &entry.note {
                map.insert(format!("{}{}", id, NOTE_SUFFIX), Value::from(note.as_str()));
            }
        }
        Value::Object(map)
    }

    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Decode the flat `coffeeRatings` JSON object
    ///
    /// Fails only when the payload is not a JSON object. A star value stored
    /// as a numeric string (`"5"`) is read as a number and written back as
    /// one. Keys that do not describe a valid rating or note are kept aside
    /// and written back unchanged, so nothing is lost on the next save.
    pub fn from_json_str(json: &str) -> RatingResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| RatingError::Corrupt(e.to_string()))?;
        match value {
            Value::Object(map) => Ok(Self::from_json_map(map)),
            other => Err(RatingError::Corrupt(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    fn from_json_map(map: Map<String, Value>) -> Self {
        let mut book = Self::new();

        for (key, value) in map {
            if let Some(id) = key.strip_suffix(NOTE_SUFFIX) {
                match (id.parse::<ShopId>(), value) {
                    (Ok(id), Value::String(note)) => book.set_note(id, note),
                    (_, value) => {
                        tracing::debug!(key = %key, kind = json_kind(&value), "Keeping invalid note entry aside");
                        book.unrecognized.insert(key, value);
                    }
                }
                continue;
            }

            let Ok(id) = key.parse::<ShopId>() else {
                tracing::debug!(key = %key, "Keeping unrecognized rating key aside");
                book.unrecognized.insert(key, value);
                continue;
            };

            match parse_stars(&value) {
                Some(stars) => book.set_rating(id, stars),
                None => {
                    tracing::debug!(key = %key, value = %value, "Keeping invalid star value aside");
                    book.unrecognized.insert(key, value);
                }
            }
        }

        book
    }
}

/// Accept integral numbers and numeric strings, as browsers may have
/// stored either
fn parse_stars(value: &Value) -> Option<Stars> {
    let raw = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    let raw = u8::try_from(raw).ok()?;
    Stars::new(raw).ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars(n: u8) -> Stars {
        Stars::new(n).unwrap()
    }

    #[test]
    fn test_stars_bounds() {
        assert!(Stars::new(0).is_err());
        assert_eq!(Stars::new(1).unwrap().get(), 1);
        assert_eq!(Stars::new(5).unwrap().get(), 5);
        assert!(matches!(Stars::new(6), Err(RatingError::InvalidStars(6))));
    }

    #[test]
    fn test_rating_and_note_are_independent() {
        let mut book = RatingBook::new();
        book.set_note(1, "fruity");
        book.set_rating(1, stars(4));
        assert_eq!(book.note(1), Some("fruity"));

        book.set_note(1, "actually nutty");
        assert_eq!(book.rating(1), Some(stars(4)));
        assert_eq!(book.note(1), Some("actually nutty"));

        book.set_rating(1, stars(2));
        assert_eq!(book.rating(1), Some(stars(2)));
        assert_eq!(book.note(1), Some("actually nutty"));
    }

    #[test]
    fn test_wire_format_uses_flat_keys() {
        let mut book = RatingBook::new();
        book.set_rating(1, stars(4));
        book.set_note(1, "Bold & balanced!");
        book.set_note(3, "Try the cortado");

        let value = book.to_json_value();
        assert_eq!(value["1"], serde_json::json!(4));
        assert_eq!(value["1-note"], serde_json::json!("Bold & balanced!"));
        assert_eq!(value["3-note"], serde_json::json!("Try the cortado"));
        assert!(value.get("3").is_none());
    }

    #[test]
    fn test_reload_matches_after_update_sequence() {
        let mut book = RatingBook::new();
        let updates: [(ShopId, Option<u8>, Option<&str>); 7] = [
            (1, Some(3), None),
            (2, None, Some("")),
            (1, None, Some("smooth")),
            (4, Some(5), Some("best in town")),
            (1, Some(1), None),
            (2, Some(2), None),
            (4, None, Some("12-note looking text")),
        ];

        for (id, rating, note) in updates {
            if let Some(r) = rating {
                book.set_rating(id, stars(r));
            }
            if let Some(n) = note {
                book.set_note(id, n);
            }
            let reloaded = RatingBook::from_json_str(&book.to_json_string()).unwrap();
            assert_eq!(reloaded, book);
        }
    }

    #[test]
    fn test_parse_tolerates_bad_keys() {
        let json = r#"{
            "1": 4,
            "2": "5",
            "3": 9,
            "4": 2.5,
            "5-note": 17,
            "abc": 3,
            "x-note": "orphan",
            "6-note": "kept"
        }"#;

        let book = RatingBook::from_json_str(json).unwrap();
        assert_eq!(book.rating(1), Some(stars(4)));
        assert_eq!(book.rating(2), Some(stars(5)));
        assert_eq!(book.rating(3), None);
        assert_eq!(book.rating(4), None);
        assert_eq!(book.note(5), None);
        assert_eq!(book.note(6), Some("kept"));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_write_back_keeps_unrecognized_keys() {
        let mut book = RatingBook::from_json_str(r#"{"2":"5","abc":1,"3":9,"x-note":"orphan"}"#).unwrap();
        book.set_note(2, "bright");

        let value = book.to_json_value();
        // Numeric-string stars are normalized to numbers
        assert_eq!(value["2"], serde_json::json!(5));
        assert_eq!(value["2-note"], serde_json::json!("bright"));
        assert_eq!(value["abc"], serde_json::json!(1));
        assert_eq!(value["3"], serde_json::json!(9));
        assert_eq!(value["x-note"], serde_json::json!("orphan"));

        let reloaded = RatingBook::from_json_str(&book.to_json_string()).unwrap();
        assert_eq!(reloaded, book);
    }

    #[test]
    fn test_valid_rating_replaces_unrecognized_value() {
        let mut book = RatingBook::from_json_str(r#"{"3":9}"#).unwrap();
        assert_eq!(book.rating(3), None);

        book.set_rating(3, stars(2));
        assert_eq!(book.to_json_value()["3"], serde_json::json!(2));
        assert_eq!(
            RatingBook::from_json_str(&book.to_json_string()).unwrap().rating(3),
            Some(stars(2))
        );
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(matches!(
            RatingBook::from_json_str("[1, 2]"),
            Err(RatingError::Corrupt(_))
        ));
        assert!(matches!(
            RatingBook::from_json_str("{not json"),
            Err(RatingError::Corrupt(_))
        ));
    }

    #[test]
    fn test_entry_serde() {
        let entry = RatingEntry {
            rating: Some(stars(3)),
            note: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"rating":3}"#);

        let bad: Result<RatingEntry, _> = serde_json::from_str(r#"{"rating":7}"#);
        assert!(bad.is_err());
    }
}
