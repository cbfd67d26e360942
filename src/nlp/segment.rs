//! Sentence segmentation of clinical note text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Half-open character span `[start, end)` of one sentence in its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

impl SentenceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// External sentence splitter.
///
/// Returned spans are ordered, non-overlapping and deterministic for a given
/// text.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<SentenceSpan>;
}

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["')\]]*(?:\s+|$)"#).expect("valid regex"));

/// Titles precede a name, so their period never ends a sentence.
static TITLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["dr", "mr", "mrs", "ms", "prof"].into_iter().collect());

/// Abbreviations that only continue the sentence when the next word starts
/// with a lower-case letter or a digit ("No. 5", "p.o. daily", but not
/// "Tobacco: no. Fever ...").
static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "st", "vs", "no", "e.g", "i.e", "etc", "approx", "pt", "hx", "dx", "sx", "tx", "b.i.d",
        "t.i.d", "q.i.d", "q.d", "q.h.s", "h.s", "p.o", "p.r.n", "a.m", "p.m", "fig", "min",
        "max",
    ]
    .into_iter()
    .collect()
});

/// Splits after `.`, `!` or `?` followed by whitespace, unless the period
/// closes a title, a single-letter initial, or a known abbreviation that the
/// next word continues.
#[derive(Debug, Clone, Default)]
pub struct PunctuationSegmenter;

impl PunctuationSegmenter {
    pub fn new() -> Self {
        Self
    }

    fn closes_abbreviation(candidate: &str, following: &str) -> bool {
        let Some(last) = candidate.split_whitespace().last() else {
            return false;
        };
        let word = last.trim_end_matches('.').to_lowercase();
        if word.is_empty() {
            return false;
        }
        if TITLES.contains(word.as_str())
            || (word.chars().count() == 1 && word.chars().all(char::is_alphabetic))
        {
            return true;
        }
        let continues = following
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit());
        continues && ABBREVIATIONS.contains(word.as_str())
    }
}

impl Segmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<SentenceSpan> {
        let mut spans = Vec::new();
        let mut sentence_start = 0;
        for found in BOUNDARY.find_iter(text) {
            let terminator = found.as_str().trim_end();
            let terminator_end = found.start() + terminator.len();
            if terminator == "."
                && Self::closes_abbreviation(
                    &text[sentence_start..terminator_end],
                    &text[found.end()..],
                )
            {
                continue;
            }
            push_trimmed(text, sentence_start, terminator_end, &mut spans);
            sentence_start = found.end();
        }
        push_trimmed(text, sentence_start, text.len(), &mut spans);
        spans
    }
}

/// Push the byte range `[from, to)` of `text` as a character span, without
/// surrounding whitespace.
fn push_trimmed(text: &str, from: usize, to: usize, spans: &mut Vec<SentenceSpan>) {
    let raw = &text[from..to];
    let trimmed = raw.trim_start();
    let from = from + (raw.len() - trimmed.len());
    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        return;
    }
    let start = text[..from].chars().count();
    let end = start + trimmed.chars().count();
    spans.push(SentenceSpan::new(start, end));
}
