//! In-memory view of one annotated clinical note.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Semantic kind of an annotated span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Event,
    Timex3,
}

impl EventKind {
    pub fn is_timex(self) -> bool {
        matches!(self, Self::Timex3)
    }
}

/// An annotated clinical event or temporal expression.
///
/// Offsets are character offsets into [`Document::text`], half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub kind: EventKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// True for TIMEX3 spans equal to the admission or discharge date.
    pub is_section_time: bool,
}

impl Event {
    pub fn event(id: impl Into<String>, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            id: id.into(),
            kind: EventKind::Event,
            text: text.into(),
            start,
            end,
            is_section_time: false,
        }
    }

    pub fn timex(id: impl Into<String>, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind: EventKind::Timex3,
            ..Self::event(id, text, start, end)
        }
    }

    pub fn section_time(mut self) -> Self {
        self.is_section_time = true;
        self
    }

    pub fn is_timex(&self) -> bool {
        self.kind.is_timex()
    }
}

/// A gold temporal link between two events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalLink {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
}

/// Events of one document keyed by id, in annotation order.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    events: IndexMap<String, Event>,
}

impl EventIndex {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    /// Look an event up by id, falling back to a case-insensitive match on
    /// its text. Some exported links carry the event text in the id field.
    pub fn resolve(&self, reference: &str) -> Option<&Event> {
        self.get(reference).or_else(|| {
            self.events
                .values()
                .find(|e| e.text.eq_ignore_ascii_case(reference))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One clinical note with its annotations.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name the note was loaded from; used to align reports.
    pub filename: String,
    pub text: String,
    pub events: EventIndex,
    pub links: Vec<TemporalLink>,
}

impl Document {
    pub fn new(
        filename: impl Into<String>,
        text: impl Into<String>,
        events: impl IntoIterator<Item = Event>,
        links: Vec<TemporalLink>,
    ) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            events: EventIndex::new(events),
            links,
        }
    }
}
