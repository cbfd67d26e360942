//! Deduplication and gold ∪ candidate merging.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::pairs::pair::{DocumentPairs, Pair, PairKey};

/// Keep the first pair per unordered id pair, preserving order.
pub fn unique_pairs(pairs: impl IntoIterator<Item = Pair>) -> Vec<Pair> {
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.key()))
        .collect()
}

/// Concatenate `first` and `second`, keeping the first occurrence of each
/// unordered id pair. Entries of `first` win.
pub fn union(first: &[Pair], second: &[Pair]) -> Vec<Pair> {
    unique_pairs(first.iter().chain(second).cloned())
}

/// Union two per-document collections aligned by filename. Reports keep the
/// order of `gold`, followed by documents only present in `candidates`.
pub fn union_reports(gold: &[DocumentPairs], candidates: &[DocumentPairs]) -> Vec<DocumentPairs> {
    let mut by_file: IndexMap<&str, &[Pair]> = candidates
        .iter()
        .map(|r| (r.filename.as_str(), r.pairs.as_slice()))
        .collect();
    let mut merged: Vec<DocumentPairs> = gold
        .iter()
        .map(|report| {
            let extra = by_file.shift_remove(report.filename.as_str()).unwrap_or(&[]);
            DocumentPairs::new(&report.filename, union(&report.pairs, extra))
        })
        .collect();
    merged.extend(
        by_file
            .into_iter()
            .map(|(filename, pairs)| DocumentPairs::new(filename, unique_pairs(pairs.to_vec()))),
    );
    merged
}

/// Number of `gold` pairs whose unordered id pair also occurs in `candidates`.
pub fn coverage(gold: &[Pair], candidates: &[Pair]) -> usize {
    let known: HashSet<PairKey> = candidates.iter().map(Pair::key).collect();
    gold.iter().filter(|p| known.contains(&p.key())).count()
}
