//! Gold and candidate pair generation.

pub mod batch;
pub mod gold;
pub mod pair;
pub mod position;
pub mod reach;
pub mod rules;
pub mod union;

pub use pair::{DocumentPairs, Endpoint, Pair, PairKey, PairedIdSet};
pub use rules::{CandidateGenerator, Rule};
