//! Trained model parameters
//!
//! [`Storage`] holds everything the sentence tokenizer needs at inference
//! time. It is mutated by the [`Trainer`](crate::Trainer) and should be
//! treated as an immutable snapshot once published to readers; share it
//! behind an `Arc` for concurrent tokenization.

use crate::error::Result;
use crate::ortho::{OrthoContext, OrthoFlag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Separator between the two members of a stored collocation
pub const COLLOCATION_SEPARATOR: char = ',';

/// Abbreviations, collocations, sentence starters and orthographic context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Storage {
    abbrev_types: HashSet<String>,
    collocations: HashSet<String>,
    sent_starters: HashSet<String>,
    ortho_context: HashMap<String, OrthoContext>,
}

/// Wire shape of a model snapshot
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(rename = "AbbrevTypes", default)]
    abbrev_types: BTreeMap<String, u32>,
    #[serde(rename = "Collocations", default)]
    collocations: BTreeMap<String, u32>,
    #[serde(rename = "SentStarters", default)]
    sent_starters: BTreeMap<String, u32>,
    #[serde(rename = "OrthoContext", default)]
    ortho_context: BTreeMap<String, u32>,
}

pub(crate) fn collocation_key(first: &str, second: &str) -> String {
    let mut key = String::with_capacity(first.len() + second.len() + 1);
    key.push_str(first);
    key.push(COLLOCATION_SEPARATOR);
    key.push_str(second);
    key
}

fn present(set: &HashSet<String>) -> BTreeMap<String, u32> {
    set.iter().map(|key| (key.clone(), 1)).collect()
}

fn marked(map: BTreeMap<String, u32>) -> HashSet<String> {
    map.into_iter()
        .filter(|(_, marker)| *marker != 0)
        .map(|(key, _)| key)
        .collect()
}

impl Storage {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty model seeded with abbreviation types (without trailing periods)
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut storage = Self::new();
        for abbrev in abbreviations {
            storage.add_abbreviation(abbrev);
        }
        storage
    }

    /// Whether `typ` is a known abbreviation
    pub fn is_abbreviation(&self, typ: &str) -> bool {
        self.abbrev_types.contains(typ)
    }

    /// Register an abbreviation type
    pub fn add_abbreviation(&mut self, typ: impl Into<String>) {
        self.abbrev_types.insert(typ.into());
    }

    /// Forget an abbreviation type; returns whether it was known
    pub fn remove_abbreviation(&mut self, typ: &str) -> bool {
        self.abbrev_types.remove(typ)
    }

    /// Known abbreviation types, unordered
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.abbrev_types.iter().map(String::as_str)
    }

    /// Whether `(first, second)` is a known collocation
    pub fn is_collocation(&self, first: &str, second: &str) -> bool {
        self.collocations.contains(&collocation_key(first, second))
    }

    /// Register a collocation pair
    pub fn add_collocation(&mut self, first: &str, second: &str) {
        self.collocations.insert(collocation_key(first, second));
    }

    /// Known collocations in their joined `first,second` form
    pub fn collocations(&self) -> impl Iterator<Item = &str> {
        self.collocations.iter().map(String::as_str)
    }

    /// Whether `typ` is a known sentence starter
    pub fn is_sentence_starter(&self, typ: &str) -> bool {
        self.sent_starters.contains(typ)
    }

    /// Register a sentence starter
    pub fn add_sentence_starter(&mut self, typ: impl Into<String>) {
        self.sent_starters.insert(typ.into());
    }

    /// Known sentence starters, unordered
    pub fn sentence_starters(&self) -> impl Iterator<Item = &str> {
        self.sent_starters.iter().map(String::as_str)
    }

    /// Observed orthographic context of `typ`; empty when never seen
    pub fn ortho_context(&self, typ: &str) -> OrthoContext {
        self.ortho_context.get(typ).copied().unwrap_or_default()
    }

    /// OR `flag` into the orthographic context of `typ`
    pub fn add_ortho_context(&mut self, typ: &str, flag: OrthoFlag) {
        match self.ortho_context.get_mut(typ) {
            Some(ctx) => ctx.insert(flag),
            None => {
                self.ortho_context.insert(typ.to_string(), flag.into());
            }
        }
    }

    /// Number of types with recorded orthographic context
    pub fn ortho_context_len(&self) -> usize {
        self.ortho_context.len()
    }

    /// Replace both finalized sets in one step
    pub(crate) fn replace_finalized(
        &mut self,
        sent_starters: HashSet<String>,
        collocations: HashSet<String>,
    ) {
        self.sent_starters = sent_starters;
        self.collocations = collocations;
    }

    /// Union every set and OR every orthographic bit field of `other` into `self`
    pub fn merge(&mut self, other: &Storage) {
        self.abbrev_types.extend(other.abbrev_types.iter().cloned());
        self.collocations.extend(other.collocations.iter().cloned());
        self.sent_starters.extend(other.sent_starters.iter().cloned());
        for (typ, ctx) in &other.ortho_context {
            *self.ortho_context.entry(typ.clone()).or_default() |= *ctx;
        }
    }

    /// Deserialize a model snapshot
    ///
    /// Set entries with a zero marker are treated as absent. On failure the
    /// error is returned and no storage is produced.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_slice(data)?;
        Ok(Self {
            abbrev_types: marked(snapshot.abbrev_types),
            collocations: marked(snapshot.collocations),
            sent_starters: marked(snapshot.sent_starters),
            ortho_context: snapshot
                .ortho_context
                .into_iter()
                .map(|(typ, bits)| (typ, OrthoContext::from_bits_truncate(bits)))
                .collect(),
        })
    }

    /// Serialize a model snapshot with sorted keys
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.snapshot())?)
    }

    /// Serialize a model snapshot, indented for humans
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.snapshot())?)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            abbrev_types: present(&self.abbrev_types),
            collocations: present(&self.collocations),
            sent_starters: present(&self.sent_starters),
            ortho_context: self
                .ortho_context
                .iter()
                .map(|(typ, ctx)| (typ.clone(), ctx.bits()))
                .collect(),
        }
    }
}
