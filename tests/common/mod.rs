#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use tlink_pairs::{
    data::document::{Document, Event, TemporalLink},
    error::SyntaxError,
    nlp::syntax::{ParsedSentence, SyntaxParser, Word},
};

/// Builds a document by locating each annotated surface string in order.
pub struct DocBuilder {
    filename: String,
    text: String,
    cursor: usize,
    events: Vec<Event>,
    links: Vec<TemporalLink>,
}

impl DocBuilder {
    pub fn new(text: &str) -> Self {
        Self {
            filename: "note.xml".into(),
            text: text.into(),
            cursor: 0,
            events: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn named(mut self, filename: &str) -> Self {
        self.filename = filename.into();
        self
    }

    fn locate(&mut self, surface: &str) -> (usize, usize) {
        let pos = self.text[self.cursor..]
            .find(surface)
            .map(|p| p + self.cursor)
            .unwrap_or_else(|| panic!("`{surface}` not found after {}", self.cursor));
        self.cursor = pos + surface.len();
        (pos, pos + surface.len())
    }

    pub fn event(mut self, id: &str, surface: &str) -> Self {
        let (start, end) = self.locate(surface);
        self.events.push(Event::event(id, surface, start, end));
        self
    }

    pub fn timex(mut self, id: &str, surface: &str) -> Self {
        let (start, end) = self.locate(surface);
        self.events.push(Event::timex(id, surface, start, end));
        self
    }

    pub fn sectime(mut self, id: &str, surface: &str) -> Self {
        let (start, end) = self.locate(surface);
        self.events
            .push(Event::timex(id, surface, start, end).section_time());
        self
    }

    pub fn link(mut self, id: &str, from: &str, to: &str) -> Self {
        self.links.push(TemporalLink {
            id: id.into(),
            from_id: from.into(),
            to_id: to.into(),
        });
        self
    }

    pub fn build(self) -> Document {
        Document::new(self.filename, self.text, self.events, self.links)
    }
}

pub fn w(text: &str, upos: &str, deprel: &str, head: usize) -> Word {
    Word::new(text, upos, deprel, head)
}

/// Whitespace tokens without any dependency structure.
pub fn flat(text: &str) -> ParsedSentence {
    ParsedSentence::new(
        text.split_whitespace()
            .map(|t| w(t, "X", "dep", 0))
            .collect(),
    )
}

/// Parser answering from a fixed table; unknown text gets a flat parse.
/// Counts every call.
#[derive(Default)]
pub struct MapParser {
    parses: HashMap<String, Vec<ParsedSentence>>,
    calls: AtomicUsize,
}

impl MapParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, words: Vec<Word>) -> Self {
        self.parses
            .insert(text.into(), vec![ParsedSentence::new(words)]);
        self
    }

    pub fn with_split(mut self, text: &str, sentences: Vec<Vec<Word>>) -> Self {
        self.parses.insert(
            text.into(),
            sentences.into_iter().map(ParsedSentence::new).collect(),
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SyntaxParser for MapParser {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>, SyntaxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .parses
            .get(text.trim())
            .cloned()
            .unwrap_or_else(|| vec![flat(text)]))
    }
}

/// Every token governs the next one; the first token is a root noun.
pub struct ChainParser;

impl SyntaxParser for ChainParser {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>, SyntaxError> {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(i, t)| {
                if i == 0 {
                    w(t, "NOUN", "root", 0)
                } else {
                    w(t, "NOUN", "dep", i)
                }
            })
            .collect();
        Ok(vec![ParsedSentence::new(words)])
    }
}

/// `(from, to)` ids of `pairs`, in order.
pub fn ids(pairs: &[tlink_pairs::pairs::Pair]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|p| (p.from.id.clone(), p.to.id.clone()))
        .collect()
}

pub fn pair(from: &str, to: &str) -> (String, String) {
    (from.to_string(), to.to_string())
}
