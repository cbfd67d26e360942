mod common;

use common::{w, MapParser};
use tlink_pairs::{
    error::PairingError,
    nlp::{
        head_noun::head_noun,
        syntax::{DependencyEdge, ParseCache, ParsedSentence},
    },
    pairs::reach::{linked, reaches},
};

fn edge(head: usize, dependent: usize) -> DependencyEdge {
    DependencyEdge {
        relation: "dep".into(),
        head,
        dependent,
    }
}

#[test]
fn direct_and_transitive_governance() {
    let edges = [edge(2, 1), edge(1, 3), edge(3, 4)];
    assert!(reaches(&edges, 2, 1));
    assert!(reaches(&edges, 2, 4));
    assert!(reaches(&edges, 1, 4));
    assert!(!reaches(&edges, 4, 2));
    assert!(!reaches(&edges, 3, 1));
}

#[test]
fn linked_checks_both_directions() {
    let edges = [edge(2, 1), edge(2, 3)];
    assert!(linked(&edges, 1, 2));
    assert!(linked(&edges, 2, 1));
    // Siblings share a governor but neither governs the other.
    assert!(!linked(&edges, 1, 3));
}

#[test]
fn cycles_terminate() {
    let edges = [edge(1, 2), edge(2, 3), edge(3, 1)];
    assert!(reaches(&edges, 1, 3));
    assert!(!reaches(&edges, 4, 1));
    assert!(!reaches(&[edge(5, 5)], 1, 5));
}

#[test]
fn unknown_tokens_are_unreachable() {
    assert!(!reaches(&[], 1, 2));
    assert!(!linked(&[edge(2, 1)], 7, 8));
}

#[test]
fn edges_skip_root_and_dangling_heads() {
    let parsed = ParsedSentence::new(vec![
        w("Pain", "NOUN", "nsubj", 2),
        w("noted", "VERB", "root", 0),
        w("today", "NOUN", "obl", 9),
    ]);
    let edges = parsed.edges();
    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].head, edges[0].dependent), (2, 1));
    assert_eq!(edges[0].relation, "nsubj");
}

#[test]
fn head_noun_is_the_root_noun() {
    let parsed = ParsedSentence::new(vec![
        w("the", "DET", "det", 2),
        w("chest", "NOUN", "compound", 3),
        w("pain", "NOUN", "root", 0),
    ]);
    assert_eq!(parsed.head_noun(), "pain");

    let verbal = ParsedSentence::new(vec![w("seen", "VERB", "root", 0)]);
    assert_eq!(verbal.head_noun(), "");
}

#[test]
fn head_noun_parses_each_text_once() {
    let parser = MapParser::new().with(
        "the rash",
        vec![w("the", "DET", "det", 2), w("rash", "NOUN", "root", 0)],
    );
    let mut cache = ParseCache::new(&parser);
    assert_eq!(head_noun(&mut cache, "the rash").unwrap(), "rash");
    assert_eq!(head_noun(&mut cache, "the rash").unwrap(), "rash");
    assert_eq!(parser.calls(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn head_noun_rejects_multi_sentence_parses() {
    let parser = MapParser::new().with_split(
        "pain. fever",
        vec![
            vec![w("pain", "NOUN", "root", 0), w(".", "PUNCT", "punct", 1)],
            vec![w("fever", "NOUN", "root", 0)],
        ],
    );
    let mut cache = ParseCache::new(&parser);
    let err = head_noun(&mut cache, "pain. fever").unwrap_err();
    assert!(matches!(
        err,
        PairingError::ParseAssumptionViolated { count: 2, .. }
    ));
    assert!(cache.is_empty());
}
