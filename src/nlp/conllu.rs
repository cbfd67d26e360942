//! Syntax adapter serving pre-computed parses from a CoNLL-U file.
//!
//! Each sentence block must carry a `# text = ...` comment; lookups are exact
//! matches on that text (surrounding whitespace ignored).
//!
//! Two kinds of text are looked up: every segmented sentence holding an open
//! event pair, and the surface text of every event compared by head noun. The
//! file therefore needs one block per sentence and one block per distinct
//! event text; a missing block fails the whole document with
//! [`SyntaxError::MissingParse`].

use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use crate::{
    error::SyntaxError,
    nlp::syntax::{ParsedSentence, SyntaxParser, Word},
};

const TEXT_COMMENT: &str = "# text =";

/// In-memory store of CoNLL-U parses keyed by sentence text.
#[derive(Debug, Clone, Default)]
pub struct ConlluParses {
    sentences: HashMap<String, ParsedSentence>,
}

impl ConlluParses {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;
        let parses = Self::parse_str(&raw).with_context(|| format!("parse {path:?}"))?;
        info!(path = %path.display(), sentences = parses.len(), "loaded conllu parses");
        Ok(parses)
    }

    pub fn parse_str(raw: &str) -> Result<Self> {
        let mut sentences = HashMap::new();
        let mut text: Option<String> = None;
        let mut words = Vec::new();
        for (line_no, line) in raw.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                flush(&mut text, &mut words, &mut sentences);
                continue;
            }
            if let Some(value) = line.strip_prefix(TEXT_COMMENT) {
                text = Some(value.trim().to_string());
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Some(word) = parse_row(line).with_context(|| format!("line {}", line_no + 1))? {
                words.push(word);
            }
        }
        flush(&mut text, &mut words, &mut sentences);
        Ok(Self { sentences })
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl SyntaxParser for ConlluParses {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>, SyntaxError> {
        self.sentences
            .get(text.trim())
            .map(|s| vec![s.clone()])
            .ok_or_else(|| SyntaxError::MissingParse(text.to_string()))
    }
}

fn flush(
    text: &mut Option<String>,
    words: &mut Vec<Word>,
    sentences: &mut HashMap<String, ParsedSentence>,
) {
    let block = std::mem::take(words);
    match text.take() {
        Some(key) => {
            sentences.insert(key, ParsedSentence::new(block));
        }
        None if !block.is_empty() => {
            warn!(tokens = block.len(), "conllu block without text comment skipped")
        }
        None => {}
    }
}

/// Parse one token row; multiword ranges and empty nodes yield `None`.
fn parse_row(line: &str) -> Result<Option<Word>> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() < 8 {
        return Err(anyhow!("expected at least 8 columns, found {}", cols.len()));
    }
    if cols[0].contains('-') || cols[0].contains('.') {
        return Ok(None);
    }
    let head = if cols[6] == "_" {
        0
    } else {
        cols[6]
            .parse()
            .with_context(|| format!("invalid head `{}`", cols[6]))?
    };
    Ok(Some(Word::new(cols[1], cols[3], cols[7].to_lowercase(), head)))
}
