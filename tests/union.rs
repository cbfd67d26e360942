mod common;

use common::{ids, pair, DocBuilder};
use proptest::prelude::*;
use tlink_pairs::{
    data::document::Document,
    pairs::{
        union::{coverage, union, union_reports, unique_pairs},
        DocumentPairs, Pair,
    },
};

fn doc() -> Document {
    DocBuilder::new("fever cough rash pain today")
        .event("E1", "fever")
        .event("E2", "cough")
        .event("E3", "rash")
        .event("E4", "pain")
        .timex("T1", "today")
        .build()
}

fn between(doc: &Document, from: &str, to: &str) -> Pair {
    Pair::between(doc.events.get(from).unwrap(), doc.events.get(to).unwrap())
}

#[test]
fn gold_wins_over_reversed_candidates() {
    let doc = doc();
    let gold = vec![between(&doc, "E1", "T1").with_link("TL0")];
    let candidates = vec![between(&doc, "T1", "E1"), between(&doc, "E2", "E3")];

    let merged = union(&gold, &candidates);
    assert_eq!(ids(&merged), vec![pair("E1", "T1"), pair("E2", "E3")]);
    assert_eq!(merged[0].link_id.as_deref(), Some("TL0"));
}

#[test]
fn unique_pairs_keeps_first_occurrence() {
    let doc = doc();
    let pairs = vec![
        between(&doc, "E1", "E2"),
        between(&doc, "E3", "E4"),
        between(&doc, "E2", "E1"),
        between(&doc, "E1", "E2"),
    ];
    assert_eq!(
        ids(&unique_pairs(pairs)),
        vec![pair("E1", "E2"), pair("E3", "E4")]
    );
}

#[test]
fn reports_align_by_filename() {
    let doc = doc();
    let gold = vec![
        DocumentPairs::new("1.xml", vec![between(&doc, "E1", "E2")]),
        DocumentPairs::new("2.xml", vec![between(&doc, "E3", "E4")]),
    ];
    let candidates = vec![
        DocumentPairs::new("3.xml", vec![between(&doc, "E1", "T1")]),
        DocumentPairs::new("2.xml", vec![between(&doc, "E4", "E3"), between(&doc, "E2", "E3")]),
    ];

    let merged = union_reports(&gold, &candidates);
    let names: Vec<&str> = merged.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["1.xml", "2.xml", "3.xml"]);
    assert_eq!(ids(&merged[0].pairs), vec![pair("E1", "E2")]);
    assert_eq!(ids(&merged[1].pairs), vec![pair("E3", "E4"), pair("E2", "E3")]);
    assert_eq!(ids(&merged[2].pairs), vec![pair("E1", "T1")]);
}

#[test]
fn coverage_ignores_direction() {
    let doc = doc();
    let gold = vec![between(&doc, "E1", "T1"), between(&doc, "E2", "E3")];
    let candidates = vec![between(&doc, "T1", "E1"), between(&doc, "E1", "E4")];
    assert_eq!(coverage(&gold, &candidates), 1);
    assert_eq!(coverage(&gold, &[]), 0);
}

const IDS: [&str; 5] = ["E1", "E2", "E3", "E4", "T1"];

fn pairs_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..IDS.len(), 0..IDS.len()), 0..12)
        .prop_map(|v| v.into_iter().filter(|(a, b)| a != b).collect())
}

proptest! {
    #[test]
    fn union_size_is_gold_plus_new_candidates(
        gold in pairs_strategy(),
        candidates in pairs_strategy(),
    ) {
        let doc = doc();
        let build = |v: &[(usize, usize)]| -> Vec<Pair> {
            unique_pairs(v.iter().map(|&(a, b)| between(&doc, IDS[a], IDS[b])))
        };
        let gold = build(&gold);
        let candidates = build(&candidates);

        let merged = union(&gold, &candidates);
        let fresh = candidates.len() - coverage(&candidates, &gold);
        prop_assert_eq!(merged.len(), gold.len() + fresh);
        prop_assert_eq!(&merged[..gold.len()], &gold[..]);
        prop_assert_eq!(unique_pairs(merged.clone()), merged);
    }
}
