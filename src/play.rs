//! Play metadata and the catalog that maps play identifiers to it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A play as described in the catalog.
///
/// The genre is kept as the raw tag from the input. Catalogs may carry genres
/// that have no pricing policy; those only fail once a performance of the play
/// is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name
    pub name: String,

    /// Genre tag, e.g. `tragedy` or `comedy`
    #[serde(rename = "type")]
    pub genre: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Play {
            name: name.into(),
            genre: genre.into(),
        }
    }
}

/// Read-only lookup table of plays keyed by play identifier.
///
/// Deserializes from a JSON object such as
/// `{"hamlet": {"name": "Hamlet", "type": "tragedy"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<String, Play>,
}

impl PlayCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a play, replacing any previous entry with the same identifier.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) {
        self.plays.insert(play_id.into(), play);
    }

    /// Looks up a play by identifier.
    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.plays.get(play_id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        PlayCatalog {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}
