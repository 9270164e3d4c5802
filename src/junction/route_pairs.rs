// route_pairs.rs
//
// Enumerates the route pairs worth comparing. Pairs that share a start or an
// end never cross, so they are dropped here. Each kept pair is oriented and
// shifted so that its first route starts at position 0.

use crate::data_structures::{Route, RoutePair};

/// All comparable pairs among `routes`, normalized for [`crate::junction::pair_collides`].
///
/// `routes` is expected in canonical `(start, end)` order; each unordered pair is
/// visited exactly once.
pub fn route_pairs(routes: &[Route], n_ways: usize) -> Vec<RoutePair> {
    let mut pairs = Vec::new();
    for (i, a) in routes.iter().enumerate() {
        for b in &routes[i + 1..] {
            if let Some(pair) = normalize_pair(*a, *b, n_ways) {
                pairs.push(pair);
            }
        }
    }
    pairs
}

/// Orients `a` and `b` and shifts them relative to the first route's start.
/// Returns `None` for pairs that share a start or an end.
pub fn normalize_pair(a: Route, b: Route, n_ways: usize) -> Option<RoutePair> {
    if a.start == b.start || a.end == b.end {
        return None;
    }
    let (first, second) = orient(a, b);
    let shift = first.start;
    Some(RoutePair {
        first: first.shifted(shift, n_ways),
        second: second.shifted(shift, n_ways),
        shift,
    })
}

// A route feeding into the other goes first; otherwise the smaller start does.
fn orient(a: Route, b: Route) -> (Route, Route) {
    if a.feeds(&b) {
        (a, b)
    } else if b.feeds(&a) || b.start < a.start {
        (b, a)
    } else {
        (a, b)
    }
}
