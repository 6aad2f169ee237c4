use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::{Map, Value};
use thiserror::Error;

/// One career's attributes. The name is not stored here; it is the key of the
/// record inside a [`CareerDocument`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerRecord {
    pub description: String,
    pub salary: String,
    pub opportunities: Vec<String>,
    pub future_prospects: String,
    pub universities: Vec<String>,
    /// Keys this service does not know about, written back unchanged on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CareerRecord {
    pub fn opportunities_display(&self) -> String {
        self.opportunities.join(", ")
    }

    pub fn universities_display(&self) -> String {
        self.universities.join(", ")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("career '{0}' already exists")]
pub struct DuplicateCareer(pub String);

/// The whole persisted document: career name → record, in file order.
///
/// Serializes as a single JSON object. Insertion appends, so the order of the
/// keys on disk is the order careers were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerDocument {
    entries: Vec<(String, CareerRecord)>,
}

impl CareerDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&CareerRecord> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Appends a new career. Names are unique: an existing name is refused and
    /// the document is left as it was.
    pub fn insert(&mut self, name: String, record: CareerRecord) -> Result<(), DuplicateCareer> {
        if self.contains(&name) {
            return Err(DuplicateCareer(name));
        }
        self.entries.push((name, record));
        Ok(())
    }

    /// Last value wins for a repeated key, but the key keeps its first position.
    fn upsert(&mut self, name: String, record: CareerRecord) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = record,
            None => self.entries.push((name, record)),
        }
    }
}

impl Serialize for CareerDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CareerDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = CareerDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping career names to career records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut document = CareerDocument {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, record)) = access.next_entry::<String, CareerRecord>()? {
                    document.upsert(name, record);
                }
                Ok(document)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
