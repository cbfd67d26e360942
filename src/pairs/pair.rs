//! Pair records and the unordered-id bookkeeping shared by every rule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::document::Event;

/// One side of a pair, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl From<&Event> for Endpoint {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            text: event.text.clone(),
            start: event.start,
            end: event.end,
        }
    }
}

/// A candidate or gold pair of events.
///
/// `from`/`to` keep the order the pair was first created in; deduplication
/// ignores it (see [`PairKey`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub span_start: usize,
    pub span_end: usize,
    pub from: Endpoint,
    pub to: Endpoint,
    pub is_section_time: bool,
    /// Id of the gold link backing this pair, if any.
    pub link_id: Option<String>,
}

impl Pair {
    pub fn between(head: &Event, tail: &Event) -> Self {
        Self {
            span_start: head.start.min(tail.start),
            span_end: head.end.max(tail.end),
            from: head.into(),
            to: tail.into(),
            is_section_time: head.is_section_time || tail.is_section_time,
            link_id: None,
        }
    }

    pub fn with_link(mut self, link_id: impl Into<String>) -> Self {
        self.link_id = Some(link_id.into());
        self
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.from.id, &self.to.id)
    }
}

/// Canonical (min-id, max-id) key of an unordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }
}

/// Unordered id pairs already emitted for the current document.
///
/// Only grows: a pair is registered when it is emitted and never removed.
#[derive(Debug, Default)]
pub struct PairedIdSet {
    keys: HashSet<PairKey>,
}

impl PairedIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.keys.contains(&PairKey::new(a, b))
    }

    /// Register a pair; returns `false` when it was already present.
    pub fn insert(&mut self, a: &str, b: &str) -> bool {
        self.keys.insert(PairKey::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Pairs generated for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPairs {
    pub filename: String,
    pub pairs: Vec<Pair>,
}

impl DocumentPairs {
    pub fn new(filename: impl Into<String>, pairs: Vec<Pair>) -> Self {
        Self {
            filename: filename.into(),
            pairs,
        }
    }
}
