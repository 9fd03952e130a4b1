//! The description dataset.
//!
//! A [`Dataset`] maps canonical MIME types (`"type/subtype"`, lowercase, no
//! parameters) to human-readable descriptions. It is built once and never
//! mutated, so a single instance can be shared freely between threads.
//!
//! The crate ships a built-in table generated from the freedesktop.org
//! shared-mime-info database, available through [`Dataset::builtin`].
//! Callers with their own table can inject it through
//! [`Dataset::from_entries`] or [`Dataset::from_json_str`]; both validate the
//! table before handing it out.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::data::ENTRIES;
use crate::error::{MimeError, MimeErrorKind, MimeResult};
use crate::normalize::extract_mime_type;

static BUILTIN: Lazy<Dataset> = Lazy::new(|| {
    let entries = ENTRIES
        .iter()
        .map(|(key, value)| (Cow::Borrowed(*key), Cow::Borrowed(*value)))
        .collect::<HashMap<_, _>>();
    tracing::debug!(entries = entries.len(), "loaded built-in MIME description table");
    Dataset { entries }
});

/// Immutable map from canonical MIME type to description.
///
/// Every key is reachable through [`extract_mime_type`]: lowercase ASCII,
/// no whitespace, no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    entries: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Dataset {
    /// The table compiled into the crate. Materialised on first use.
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    /// Builds a dataset from caller-supplied entries.
    ///
    /// The whole table is rejected on the first entry that is not a
    /// canonical `type/subtype` key or has an empty description, and on any
    /// repeated key.
    pub fn from_entries<I, K, V>(entries: I) -> MimeResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: HashMap<Cow<'static, str>, Cow<'static, str>> = HashMap::new();
        for (key, value) in entries {
            let key: String = key.into();
            let value: String = value.into();
            if let Err(err) = validate_entry(&key, &value) {
                tracing::warn!(key = %key, error = %err, "rejecting MIME description table");
                return Err(err);
            }
            if map.contains_key(key.as_str()) {
                tracing::warn!(key = %key, "rejecting MIME description table with duplicate key");
                return Err(MimeError::new(
                    MimeErrorKind::DuplicateEntry,
                    format!("duplicate MIME type: {:?}", key),
                ));
            }
            map.insert(Cow::Owned(key), Cow::Owned(value));
        }
        tracing::debug!(entries = map.len(), "accepted MIME description table");
        Ok(Self { entries: map })
    }

    /// Parses a JSON object of `"type/subtype": "description"` pairs.
    pub fn from_json_str(json: &str) -> MimeResult<Self> {
        let RawEntries(entries) = serde_json::from_str::<RawEntries>(json)?;
        Self::from_entries(entries)
    }

    /// Exact, case-sensitive lookup. No normalization is applied.
    pub fn get(&self, mime_type: &str) -> Option<&str> {
        self.entries.get(mime_type).map(|value| value.as_ref())
    }

    pub fn contains(&self, mime_type: &str) -> bool {
        self.entries.contains_key(mime_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by MIME type.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_ref(), value.as_ref()))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries.into_iter()
    }

    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }
}

/// Checks a single entry against the table invariants.
fn validate_entry(key: &str, value: &str) -> MimeResult<()> {
    let invalid = |reason: &str| {
        Err(MimeError::new(
            MimeErrorKind::InvalidEntry,
            format!("invalid MIME type {:?}: {}", key, reason),
        ))
    };

    if key.is_empty() {
        return invalid("empty key");
    }
    if key.chars().any(char::is_whitespace) {
        return invalid("contains whitespace");
    }
    if key.contains(';') {
        return invalid("contains parameters");
    }
    if !key.is_ascii() {
        return invalid("not ASCII");
    }
    if key.bytes().any(|b| b.is_ascii_control()) {
        return invalid("contains control characters");
    }
    if extract_mime_type(key) != key {
        return invalid("not lowercase");
    }
    match key.split_once('/') {
        Some((top, sub)) if !top.is_empty() && !sub.is_empty() && !sub.contains('/') => {}
        _ => return invalid("expected type/subtype"),
    }
    if value.is_empty() {
        return invalid("empty description");
    }
    Ok(())
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// JSON object entries in document order, duplicates preserved.
struct RawEntries(Vec<(String, String)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of MIME types to descriptions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
