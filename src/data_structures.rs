use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A permitted movement through the junction, from one way to another.
///
/// Ordered by `(start, end)`, which is the canonical route order everywhere in
/// the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Route {
    pub start: usize,
    pub end: usize,
}

impl Route {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of ways travelled clockwise from `start` to reach `end`.
    pub fn offset(&self, n_ways: usize) -> usize {
        (self.end % n_ways + n_ways - self.start % n_ways) % n_ways
    }

    /// Re-expresses the route with way `shift` taken as position 0.
    pub fn shifted(&self, shift: usize, n_ways: usize) -> Self {
        Self {
            start: (self.start + n_ways - shift) % n_ways,
            end: (self.end + n_ways - shift) % n_ways,
        }
    }

    /// Inverse of [`Route::shifted`]: maps a shift-relative route back to junction ways.
    pub fn unshifted(&self, shift: usize, n_ways: usize) -> Self {
        Self {
            start: (self.start + shift) % n_ways,
            end: (self.end + shift) % n_ways,
        }
    }

    /// Chained onto `other`: this route ends where `other` starts.
    pub fn feeds(&self, other: &Route) -> bool {
        self.end == other.start
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

impl From<(usize, usize)> for Route {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

/// Two routes eligible for comparison, normalized so that `first.start == 0`.
///
/// `shift` is the junction way that `first` originally started at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePair {
    pub first: Route,
    pub second: Route,
    pub shift: usize,
}

impl RoutePair {
    /// Both routes in junction coordinates.
    pub fn restore(&self, n_ways: usize) -> (Route, Route) {
        (
            self.first.unshifted(self.shift, n_ways),
            self.second.unshifted(self.shift, n_ways),
        )
    }
}

/// Result of a collision check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Each colliding route with the number of partners it collides with.
    pub unsafe_routes: BTreeMap<Route, usize>,
    /// Every colliding pair, in the order the pairs were examined.
    pub colliding_pairs: Vec<(Route, Route)>,
}

impl CollisionReport {
    pub fn record(&mut self, first: Route, second: Route) {
        *self.unsafe_routes.entry(first).or_insert(0) += 1;
        *self.unsafe_routes.entry(second).or_insert(0) += 1;
        self.colliding_pairs.push((first, second));
    }

    pub fn is_empty(&self) -> bool {
        self.colliding_pairs.is_empty()
    }

    /// Number of colliding pairs.
    pub fn conflict_count(&self) -> usize {
        self.colliding_pairs.len()
    }

    pub fn count_for(&self, route: &Route) -> usize {
        self.unsafe_routes.get(route).copied().unwrap_or(0)
    }

    /// True if `a` and `b` were reported as colliding with each other.
    pub fn contains_pair(&self, a: &Route, b: &Route) -> bool {
        self.colliding_pairs
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    pub fn records(&self) -> Vec<UnsafeRouteRecord> {
        self.unsafe_routes
            .iter()
            .map(|(route, &count)| UnsafeRouteRecord {
                start: route.start,
                end: route.end,
                count,
            })
            .collect()
    }
}

/// One CSV row of an unsafe-route report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsafeRouteRecord {
    pub start: usize,
    pub end: usize,
    pub count: usize,
}
