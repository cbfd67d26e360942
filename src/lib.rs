//! Candidate temporal-link pair generation for annotated clinical notes.
//!
//! Given a note's events, timexes and gold temporal links, the crate proposes
//! the event pairs worth sending to a relation classifier: section-time
//! anchoring, sentence adjacency, dependency governance, sentence-boundary
//! pairing and head-noun coreference, applied in that order.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;
pub mod pairs;
