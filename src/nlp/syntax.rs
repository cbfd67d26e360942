//! Syntax adapter seam: tokens, POS tags and dependency edges per sentence.

use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PairingError, SyntaxError};

/// One token of a parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    /// Universal POS tag, e.g. `NOUN`.
    pub upos: String,
    /// Dependency relation to the head, lower-case (`root` for the root).
    pub deprel: String,
    /// 1-based index of the governing token; 0 for the root.
    pub head: usize,
}

impl Word {
    pub fn new(
        text: impl Into<String>,
        upos: impl Into<String>,
        deprel: impl Into<String>,
        head: usize,
    ) -> Self {
        Self {
            text: text.into(),
            upos: upos.into(),
            deprel: deprel.into(),
            head,
        }
    }
}

/// A governor-dependent relation between two tokens of one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub relation: String,
    pub head: usize,
    pub dependent: usize,
}

/// A sentence as returned by a [`SyntaxParser`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub words: Vec<Word>,
}

impl ParsedSentence {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }

    /// Dependency edges of the sentence. Root attachments are not edges;
    /// attachments to tokens outside the sentence are dropped.
    pub fn edges(&self) -> Vec<DependencyEdge> {
        let len = self.words.len();
        let mut edges = Vec::with_capacity(len);
        for (idx, word) in self.words.iter().enumerate() {
            if word.head == 0 {
                continue;
            }
            if word.head > len {
                warn!(token = idx + 1, head = word.head, len, "dangling dependency edge dropped");
                continue;
            }
            edges.push(DependencyEdge {
                relation: word.deprel.clone(),
                head: word.head,
                dependent: idx + 1,
            });
        }
        edges
    }

    /// Text of the root-governed noun, or `""`.
    pub fn head_noun(&self) -> &str {
        self.words
            .iter()
            .rev()
            .find(|w| w.upos == "NOUN" && w.deprel == "root")
            .map(|w| w.text.as_str())
            .unwrap_or("")
    }
}

/// External dependency parser.
///
/// Implementations parse `text` as-is; when their own sentence splitter
/// disagrees with the caller they return more than one sentence and the caller
/// decides what that means.
pub trait SyntaxParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>, SyntaxError>;
}

/// Per-document memo of single-sentence parses, keyed by text.
pub struct ParseCache<'p> {
    parser: &'p dyn SyntaxParser,
    parses: HashMap<String, Arc<ParsedSentence>>,
}

impl<'p> ParseCache<'p> {
    pub fn new(parser: &'p dyn SyntaxParser) -> Self {
        Self {
            parser,
            parses: HashMap::new(),
        }
    }

    /// Parse `text`, which must come back as exactly one sentence.
    pub fn parse_single(&mut self, text: &str) -> Result<Arc<ParsedSentence>, PairingError> {
        if let Some(parsed) = self.parses.get(text) {
            return Ok(Arc::clone(parsed));
        }
        let mut sentences = self.parser.parse(text)?;
        if sentences.len() != 1 {
            return Err(PairingError::ParseAssumptionViolated {
                text: text.to_string(),
                count: sentences.len(),
            });
        }
        let parsed = Arc::new(sentences.remove(0));
        self.parses.insert(text.to_string(), Arc::clone(&parsed));
        Ok(parsed)
    }

    pub fn len(&self) -> usize {
        self.parses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parses.is_empty()
    }
}
