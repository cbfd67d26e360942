//! Alignment of event spans to sentences and to parser tokens.

use crate::{
    data::document::{Event, EventIndex},
    nlp::segment::SentenceSpan,
};

/// Group events by the sentence their start offset falls in.
///
/// Entry `i` lists the events of `sentences[i]` ordered by start offset;
/// events with equal starts keep index order. Events outside every sentence
/// are dropped.
pub fn sentence_membership<'a>(
    events: &'a EventIndex,
    sentences: &[SentenceSpan],
) -> Vec<Vec<&'a Event>> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|e| e.start);

    let mut members = vec![Vec::new(); sentences.len()];
    let mut cursor = 0;
    for (idx, sentence) in sentences.iter().enumerate() {
        while cursor < ordered.len() && ordered[cursor].start < sentence.start {
            cursor += 1;
        }
        while cursor < ordered.len() && ordered[cursor].start < sentence.end {
            members[idx].push(ordered[cursor]);
            cursor += 1;
        }
    }
    members
}

/// Character spans of `tokens`, assuming one separator between tokens and the
/// first token starting at `sentence_start`.
pub fn token_spans<S: AsRef<str>>(sentence_start: usize, tokens: &[S]) -> Vec<(usize, usize)> {
    let mut spans = Vec::with_capacity(tokens.len());
    let mut offset = sentence_start;
    for token in tokens {
        let len = token.as_ref().chars().count();
        spans.push((offset, offset + len));
        offset += len + 1;
    }
    spans
}

/// 1-based indices of the tokens lying inside `[event.start, event.end)`.
pub fn event_token_indices(event: &Event, spans: &[(usize, usize)]) -> Vec<usize> {
    let mut indices = Vec::new();
    for (idx, &(start, end)) in spans.iter().enumerate() {
        if start >= event.end {
            break;
        }
        if start >= event.start && end <= event.end {
            indices.push(idx + 1);
        }
    }
    indices
}

/// Slice `text` by character offsets.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |chars: usize| {
        text.char_indices()
            .nth(chars)
            .map(|(b, _)| b)
            .unwrap_or(text.len())
    };
    let from = byte_at(start);
    let to = byte_at(end.max(start));
    &text[from..to]
}
