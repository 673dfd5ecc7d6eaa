use serde::{Deserialize, Serialize};

/// Key under which a section's introductory paragraph is stored
pub const DESCRIPTION_KEY: &str = "description";

/// Insertion-ordered mapping of member names to their HTML description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMap {
    entries: Vec<(String, String)>,
}

impl EntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Merges `other` into this map, in `other`'s order
    pub fn extend(&mut self, other: EntryMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EntryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = EntryMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Everything extracted from one documentation page.
///
/// Text fields hold raw HTML fragments; they are converted to markdown when a
/// page is rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldSet {
    /// Name of the documented entity (e.g. `Array.prototype.sort()`)
    pub name: String,

    /// First paragraph of the article
    pub short_description: String,

    pub description: String,
    pub syntax: String,
    pub parameters: String,
    pub returned_value: String,
    pub examples: String,

    /// Related pages, already rendered as bullet lines
    pub see_also: String,

    pub methods: EntryMap,
    pub properties: EntryMap,
    pub static_methods: EntryMap,
    pub static_properties: EntryMap,
}

impl FieldSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
