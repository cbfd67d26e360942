//! The five ordered candidate rules.
//!
//! Every rule receives the same [`PairedIdSet`] so that no unordered id pair
//! is emitted twice across rules, and no rule ever pairs two TIMEX3 spans.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    data::document::{Document, Event, EventIndex},
    error::PairingError,
    nlp::{
        head_noun::head_noun,
        segment::{Segmenter, SentenceSpan},
        syntax::{ParseCache, SyntaxParser},
    },
    pairs::{
        pair::{Pair, PairedIdSet},
        position::{char_slice, event_token_indices, sentence_membership, token_spans},
        reach::linked,
        union::unique_pairs,
    },
};

/// Candidate rules in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    /// Every clinical event against every section time.
    SectionTime,
    /// Consecutive events within a sentence.
    Adjacency,
    /// Events of a sentence linked in its dependency tree.
    Dependency,
    /// First and last events across adjacent sentences.
    Boundary,
    /// Events of different sentences sharing a head noun.
    HeadNoun,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::SectionTime,
        Rule::Adjacency,
        Rule::Dependency,
        Rule::Boundary,
        Rule::HeadNoun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::SectionTime => "section-time",
            Rule::Adjacency => "adjacency",
            Rule::Dependency => "dependency",
            Rule::Boundary => "boundary",
            Rule::HeadNoun => "head-noun",
        }
    }
}

/// Candidate pair generator for single documents.
pub struct CandidateGenerator<'p> {
    parser: &'p dyn SyntaxParser,
}

impl<'p> CandidateGenerator<'p> {
    pub fn new(parser: &'p dyn SyntaxParser) -> Self {
        Self { parser }
    }

    /// Segment `doc` and run every rule over it.
    pub fn generate_document(
        &self,
        doc: &Document,
        segmenter: &dyn Segmenter,
    ) -> Result<Vec<Pair>, PairingError> {
        let sentences = segmenter.segment(&doc.text);
        self.generate(doc, &sentences)
    }

    /// Run every rule over `doc` split into `sentences`.
    pub fn generate(
        &self,
        doc: &Document,
        sentences: &[SentenceSpan],
    ) -> Result<Vec<Pair>, PairingError> {
        self.generate_through(doc, sentences, Rule::HeadNoun)
    }

    /// Run rules in order up to and including `last`.
    pub fn generate_through(
        &self,
        doc: &Document,
        sentences: &[SentenceSpan],
        last: Rule,
    ) -> Result<Vec<Pair>, PairingError> {
        let members = sentence_membership(&doc.events, sentences);
        let mut cache = ParseCache::new(self.parser);
        let mut paired = PairedIdSet::new();
        let mut pairs = Vec::new();

        for rule in Rule::ALL.into_iter().filter(|r| *r <= last) {
            let found = match rule {
                Rule::SectionTime => section_time_pairs(&doc.events, &mut paired),
                Rule::Adjacency => adjacency_pairs(&members, &mut paired),
                Rule::Dependency => {
                    dependency_pairs(&doc.text, sentences, &members, &mut cache, &mut paired)?
                }
                Rule::Boundary => boundary_pairs(&members, &mut paired),
                Rule::HeadNoun => head_noun_pairs(&members, &mut cache, &mut paired)?,
            };
            debug!(file = %doc.filename, rule = rule.name(), pairs = found.len(), "applied rule");
            pairs.extend(found);
        }

        let emitted = pairs.len();
        let pairs = unique_pairs(pairs);
        if pairs.len() != emitted {
            warn!(
                file = %doc.filename,
                dropped = emitted - pairs.len(),
                "duplicate candidates removed"
            );
        }
        Ok(pairs)
    }
}

/// Emit `(head, tail)` unless both are TIMEX3 spans or the pair is known.
fn try_emit(head: &Event, tail: &Event, paired: &mut PairedIdSet, out: &mut Vec<Pair>) -> bool {
    if head.is_timex() && tail.is_timex() {
        return false;
    }
    if !paired.insert(&head.id, &tail.id) {
        return false;
    }
    out.push(Pair::between(head, tail));
    true
}

fn is_open(head: &Event, tail: &Event, paired: &PairedIdSet) -> bool {
    !(head.is_timex() && tail.is_timex()) && !paired.contains(&head.id, &tail.id)
}

/// Rule 1: pair every non-TIMEX3 event with every section time.
pub fn section_time_pairs(events: &EventIndex, paired: &mut PairedIdSet) -> Vec<Pair> {
    let mut out = Vec::new();
    for sectime in events.iter().filter(|e| e.is_section_time) {
        for event in events.iter().filter(|e| !e.is_section_time && !e.is_timex()) {
            try_emit(event, sectime, paired, &mut out);
        }
    }
    out
}

/// Rule 2: pair consecutive events of each sentence.
pub fn adjacency_pairs(members: &[Vec<&Event>], paired: &mut PairedIdSet) -> Vec<Pair> {
    let mut out = Vec::new();
    for events in members {
        for window in events.windows(2) {
            try_emit(window[0], window[1], paired, &mut out);
        }
    }
    out
}

/// Rule 3: pair events of a sentence when a token of one governs a token of
/// the other. The first linked token combination decides; the rest of that
/// pair's combinations are not examined.
pub fn dependency_pairs(
    text: &str,
    sentences: &[SentenceSpan],
    members: &[Vec<&Event>],
    cache: &mut ParseCache<'_>,
    paired: &mut PairedIdSet,
) -> Result<Vec<Pair>, PairingError> {
    let mut out = Vec::new();
    for (sentence, events) in sentences.iter().zip(members) {
        let mut candidates = Vec::new();
        for (i, head) in events.iter().enumerate() {
            for (j, tail) in events.iter().enumerate().skip(i + 1) {
                if is_open(head, tail, paired) {
                    candidates.push((i, j));
                }
            }
        }
        if candidates.is_empty() {
            continue;
        }

        let parsed = cache.parse_single(char_slice(text, sentence.start, sentence.end))?;
        let spans = token_spans(sentence.start, &parsed.tokens());
        let edges = parsed.edges();
        let tokens: Vec<Vec<usize>> = events
            .iter()
            .map(|e| event_token_indices(e, &spans))
            .collect();

        for (i, j) in candidates {
            let found = tokens[i]
                .iter()
                .any(|&h| tokens[j].iter().any(|&t| linked(&edges, h, t)));
            if found {
                try_emit(events[i], events[j], paired, &mut out);
            }
        }
    }
    Ok(out)
}

/// Rule 4: pair the first and last events of each sentence with the first and
/// last events of the next one.
pub fn boundary_pairs(members: &[Vec<&Event>], paired: &mut PairedIdSet) -> Vec<Pair> {
    let mut out = Vec::new();
    for window in members.windows(2) {
        let (prev, next) = (&window[0], &window[1]);
        let (Some(&pf), Some(&pl), Some(&nf), Some(&nl)) =
            (prev.first(), prev.last(), next.first(), next.last())
        else {
            continue;
        };
        for (head, tail) in [(pf, nf), (pf, nl), (pl, nf), (pl, nl)] {
            try_emit(head, tail, paired, &mut out);
        }
    }
    out
}

/// Rule 5: pair events of different sentences whose head nouns match.
pub fn head_noun_pairs(
    members: &[Vec<&Event>],
    cache: &mut ParseCache<'_>,
    paired: &mut PairedIdSet,
) -> Result<Vec<Pair>, PairingError> {
    let mut out = Vec::new();
    let mut nouns: HashMap<String, String> = HashMap::new();
    for (i, first) in members.iter().enumerate() {
        for second in &members[i + 1..] {
            for &head in first {
                for &tail in second {
                    if !is_open(head, tail, paired) {
                        continue;
                    }
                    let head_noun = noun_of(head, cache, &mut nouns)?;
                    if head_noun.is_empty() {
                        continue;
                    }
                    if noun_of(tail, cache, &mut nouns)? == head_noun {
                        try_emit(head, tail, paired, &mut out);
                    }
                }
            }
        }
    }
    Ok(out)
}

fn noun_of(
    event: &Event,
    cache: &mut ParseCache<'_>,
    nouns: &mut HashMap<String, String>,
) -> Result<String, PairingError> {
    if let Some(noun) = nouns.get(&event.id) {
        return Ok(noun.clone());
    }
    let noun = match head_noun(cache, &event.text) {
        Ok(noun) => noun,
        Err(err @ PairingError::ParseAssumptionViolated { .. }) => {
            warn!(event = %event.id, error = %err, "treating head noun as empty");
            String::new()
        }
        Err(err) => return Err(err),
    };
    nouns.insert(event.id.clone(), noun.clone());
    Ok(noun)
}
