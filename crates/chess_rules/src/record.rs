//! Plain records exchanged with the persistence layer.

use serde::{Deserialize, Serialize};

/// One numbered move pair. Either side may be missing: a game that starts
/// with Black to move has no White text in its first record, and an
/// unfinished game may end after White's move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub number: u32,
    pub white: Option<String>,
    pub black: Option<String>,
}

impl MoveRecord {
    pub fn new(number: u32, white: impl Into<String>, black: Option<String>) -> Self {
        Self {
            number,
            white: Some(white.into()),
            black,
        }
    }
}

/// Ordered key/value tags (event, site, date, players, result, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameMetadata {
    tags: Vec<(String, String)>,
}

impl GameMetadata {
    /// The seven standard tags with placeholder values.
    pub fn standard(white: &str, black: &str) -> Self {
        let mut meta = GameMetadata::default();
        meta.set("Event", "Casual game");
        meta.set("Site", "?");
        meta.set("Date", "????.??.??");
        meta.set("Round", "-");
        meta.set("White", white);
        meta.set("Black", black);
        meta.set("Result", "*");
        meta
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces an existing tag in place or appends a new one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.tags.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.tags.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.tags.iter().position(|(k, _)| k == key)?;
        Some(self.tags.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn event(&self) -> Option<&str> {
        self.get("Event")
    }
    pub fn site(&self) -> Option<&str> {
        self.get("Site")
    }
    pub fn date(&self) -> Option<&str> {
        self.get("Date")
    }
    pub fn white(&self) -> Option<&str> {
        self.get("White")
    }
    pub fn black(&self) -> Option<&str> {
        self.get("Black")
    }
    pub fn result(&self) -> Option<&str> {
        self.get("Result")
    }
}
