//! Per-chain settings normalization
//!
//! Chain settings arrive keyed by `default` or by a chain identifier that may
//! be written as a number or as a numeric string, with record values whose
//! numeric fields may also be strings. Normalization produces string keys and
//! numeric values while keeping first-seen key order, since that order is
//! part of the signed manifest bytes.
//!
//! ```
//! use publish_core::{RawChainSettings, normalize_chain_settings};
//! use serde_json::json;
//!
//! let raw = RawChainSettings::new()
//!     .with("default", json!({"shards": 1, "target": 1}))
//!     .with(1u64, json!({"shards": "5", "target": "10"}));
//!
//! let normalized = normalize_chain_settings(&raw);
//! assert_eq!(normalized.keys().collect::<Vec<_>>(), ["default", "1"]);
//! assert_eq!(normalized.get("1"), Some(&json!({"shards": 5, "target": 10})));
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// Key reserved for settings applied to chains without their own entry.
pub const DEFAULT_CHAIN_KEY: &str = "default";

/// Largest integer a JSON consumer can hold exactly in a double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A chain-settings key as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawChainKey {
    Number(u64),
    Text(String),
}

impl RawChainKey {
    /// Canonical string form of the key.
    ///
    /// `default` is kept verbatim, chain identifiers are rendered in base 10.
    /// Any other text is passed through.
    pub fn normalize(&self) -> String {
        match self {
            Self::Number(id) => id.to_string(),
            Self::Text(text) if text == DEFAULT_CHAIN_KEY => text.clone(),
            Self::Text(text) => match text.trim().parse::<u64>() {
                Ok(id) => id.to_string(),
                Err(_) => {
                    tracing::warn!(key = %text, "Chain settings key is not a chain id; passing through");
                    text.clone()
                }
            },
        }
    }
}

impl From<u64> for RawChainKey {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for RawChainKey {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawChainKey {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for RawChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Chain settings as loaded from configuration, in source order.
///
/// Duplicate keys are kept as separate entries; normalization decides which
/// one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawChainSettings {
    entries: Vec<(RawChainKey, Value)>,
}

impl RawChainSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, builder style.
    pub fn with(mut self, key: impl Into<RawChainKey>, value: Value) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<RawChainKey>, value: Value) {
        self.entries.push((key.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RawChainKey, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RawChainSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawChainSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawChainSettings;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of chain ids to settings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut settings = RawChainSettings::new();
                while let Some((key, value)) = access.next_entry::<RawChainKey, Value>()? {
                    settings.push(key, value);
                }
                Ok(settings)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl From<&ChainSettings> for RawChainSettings {
    fn from(settings: &ChainSettings) -> Self {
        Self {
            entries: settings
                .0
                .iter()
                .map(|(key, value)| (RawChainKey::Text(key.clone()), value.clone()))
                .collect(),
        }
    }
}

/// Normalized chain settings: string keys, numeric fields coerced.
///
/// Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainSettings(Map<String, Value>);

impl ChainSettings {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Normalize raw chain settings.
///
/// Keys go through [`RawChainKey::normalize`]. For record values every
/// numeric string property becomes a number; other properties, including
/// unknown ones, are copied unchanged. When two raw keys normalize to the
/// same string the later value replaces the earlier one in the earlier
/// position.
pub fn normalize_chain_settings(raw: &RawChainSettings) -> ChainSettings {
    let mut normalized = Map::new();
    for (key, value) in raw.iter() {
        normalized.insert(key.normalize(), normalize_record(value));
    }
    ChainSettings(normalized)
}

fn normalize_record(value: &Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, field)| (name.clone(), coerce_numeric(field)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn coerce_numeric(value: &Value) -> Value {
    match value {
        Value::String(text) => parse_number(text).map_or_else(|| value.clone(), Value::Number),
        other => other.clone(),
    }
}

/// Parse a decimal string into a JSON number.
///
/// Integral values become JSON integers so `"5"` and `"5.0"` both serialize
/// as `5`.
fn parse_number(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(int.into());
    }
    if let Ok(int) = trimmed.parse::<u64>() {
        return Some(int.into());
    }
    let float = trimmed.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
        return Some((float as i64).into());
    }
    Number::from_f64(float)
}
