//! Annotation loading and pair persistence.

pub mod annotation;
pub mod document;
pub mod pair_store;
