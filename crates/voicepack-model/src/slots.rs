//! Slot value collections.
//!
//! A slot collection is the enumerated value list of one slot type.  Each
//! value may carry synonyms.  Three input shapes are accepted:
//!
//! ```text
//! ["paris", "london"]
//! [{"value": "paris", "synonyms": ["city of light"]}]
//! {"paris": ["city of light"], "london": []}
//! ```
//!
//! Values are kept in input order, for map input too, and the first
//! occurrence of a duplicate value wins.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One enumerated slot value and its synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotValue {
    pub value: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl SlotValue {
    /// A value without synonyms.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            synonyms: Vec::new(),
        }
    }

    /// A value with the given synonyms.
    pub fn with_synonyms<I, S>(value: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }
}

/// The ordered, de-duplicated values of one slot type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSlotValues", into = "Vec<SlotValue>")]
pub struct SlotValues {
    values: Vec<SlotValue>,
}

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value unless one with the same text already exists.
    pub fn push(&mut self, value: SlotValue) {
        if !self.values.iter().any(|v| v.value == value.value) {
            self.values.push(value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether at least one value carries a non-empty synonym.
    pub fn has_synonyms(&self) -> bool {
        self.values
            .iter()
            .any(|v| v.synonyms.iter().any(|s| !s.is_empty()))
    }

    /// The value-to-synonyms mapping, exactly as supplied.
    pub fn synonym_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.values
            .iter()
            .map(|v| (v.value.clone(), serde_json::json!(v.synonyms)))
            .collect()
    }
}

impl<V: Into<SlotValue>> FromIterator<V> for SlotValues {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut values = Self::new();
        for v in iter {
            values.push(v.into());
        }
        values
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SlotValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SlotValues> for Vec<SlotValue> {
    fn from(values: SlotValues) -> Self {
        values.values
    }
}

// ---------------------------------------------------------------------------
// Input shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlotValues {
    List(Vec<RawEntry>),
    Map(OrderedPairs),
}

/// `value -> synonyms` entries in the order they were written.
struct OrderedPairs(Vec<(String, Option<Vec<String>>)>);

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of slot values to synonym lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    pairs.push(entry);
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Plain(String),
    Entry(SlotValue),
}

impl From<RawSlotValues> for SlotValues {
    fn from(raw: RawSlotValues) -> Self {
        match raw {
            RawSlotValues::List(entries) => entries
                .into_iter()
                .map(|e| match e {
                    RawEntry::Plain(value) => SlotValue::new(value),
                    RawEntry::Entry(value) => value,
                })
                .collect(),
            RawSlotValues::Map(OrderedPairs(pairs)) => pairs
                .into_iter()
                .map(|(value, synonyms)| SlotValue {
                    value,
                    synonyms: synonyms.unwrap_or_default(),
                })
                .collect(),
        }
    }
}
