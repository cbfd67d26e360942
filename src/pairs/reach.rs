//! Transitive governance over a sentence's dependency edges.

use std::collections::HashSet;

use crate::nlp::syntax::DependencyEdge;

/// Whether `head` governs `dependent`, directly or through intermediate
/// governors.
///
/// Walks upward from `dependent` over every edge whose dependent is the
/// current token. Each token is expanded at most once, so cyclic or otherwise
/// malformed edge sets terminate and answer `false`.
pub fn reaches(edges: &[DependencyEdge], head: usize, dependent: usize) -> bool {
    let mut visited = HashSet::from([dependent]);
    let mut frontier = vec![dependent];
    while let Some(node) = frontier.pop() {
        for edge in edges.iter().filter(|e| e.dependent == node) {
            if edge.head == head {
                return true;
            }
            if visited.insert(edge.head) {
                frontier.push(edge.head);
            }
        }
    }
    false
}

/// Whether either token governs the other.
pub fn linked(edges: &[DependencyEdge], a: usize, b: usize) -> bool {
    reaches(edges, a, b) || reaches(edges, b, a)
}
