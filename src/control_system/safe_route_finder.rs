use crate::control_system::collision_checker::check_unsafe_routes;
use crate::data_structures::Route;
use crate::error::{JunctionError, Result};
use crate::junction::permissions::PermissionSet;

/// Every route `start -> end` with `start != end` that is not yet permitted.
pub fn candidate_routes(green_lights: &PermissionSet, n_ways: usize) -> Result<Vec<Route>> {
    let existing = green_lights.routes(n_ways)?;
    let candidates = (0..n_ways)
        .flat_map(|start| (0..n_ways).map(move |end| Route::new(start, end)))
        .filter(|route| route.start != route.end && existing.binary_search(route).is_err())
        .collect();
    Ok(candidates)
}

/// Candidates that can be permitted while leaving the whole set collision-free.
///
/// Each candidate is checked by running a full collision check on a copy of
/// `green_lights` with that candidate added. A set that already has collisions
/// therefore admits no candidates.
pub fn find_safe_candidates(green_lights: &PermissionSet, n_ways: usize) -> Result<Vec<Route>> {
    let mut safe_routes = Vec::new();
    for candidate in candidate_routes(green_lights, n_ways)? {
        let hypothetical = green_lights.with_route(candidate, n_ways);
        if check_unsafe_routes(&hypothetical, n_ways)?.is_empty() {
            log::debug!("{}", candidate);
            safe_routes.push(candidate);
        }
    }
    Ok(safe_routes)
}

/// Proposes routes that can be added safely and commits the chosen ones.
///
/// Committing does not re-check safety: call [`SafeRouteFinder::find_safe_candidates`]
/// first and commit one of its results.
#[derive(Debug, Clone)]
pub struct SafeRouteFinder {
    green_lights: PermissionSet,
    n_ways: usize,
}

impl SafeRouteFinder {
    /// `n_ways` defaults to the highest keyed way plus one.
    pub fn new(green_lights: PermissionSet, n_ways: Option<usize>) -> Result<Self> {
        let n_ways = green_lights.resolve_n_ways(n_ways)?;
        green_lights.validate(n_ways)?;
        Ok(Self {
            green_lights,
            n_ways,
        })
    }

    pub fn n_ways(&self) -> usize {
        self.n_ways
    }

    pub fn green_lights(&self) -> &PermissionSet {
        &self.green_lights
    }

    pub fn into_green_lights(self) -> PermissionSet {
        self.green_lights
    }

    pub fn candidate_routes(&self) -> Result<Vec<Route>> {
        candidate_routes(&self.green_lights, self.n_ways)
    }

    pub fn find_safe_candidates(&self) -> Result<Vec<Route>> {
        let safe_routes = find_safe_candidates(&self.green_lights, self.n_ways)?;
        log::info!(
            "Found {} safe routes on {} ways",
            safe_routes.len(),
            self.n_ways
        );
        Ok(safe_routes)
    }

    /// Permits `start -> end`.
    pub fn add_safe_route(&mut self, start: usize, end: usize) -> Result<()> {
        let route = Route::new(start, end);
        PermissionSet::check_route(&route, self.n_ways)?;
        if self.green_lights.contains_route(&route, self.n_ways) {
            return Err(JunctionError::AlreadyPermitted(route));
        }
        self.green_lights.add_route(route, self.n_ways)?;
        log::info!("Added route {}", route);
        Ok(())
    }

    /// Commits safe candidates in canonical order until none is left, and returns
    /// the committed routes. The result is a maximal collision-free extension.
    pub fn commit_all_safe(&mut self) -> Result<Vec<Route>> {
        // Adding routes never resolves a collision, so only the current safe
        // candidates can still be safe later on.
        let mut committed = Vec::new();
        for candidate in self.find_safe_candidates()? {
            let hypothetical = self.green_lights.with_route(candidate, self.n_ways);
            if check_unsafe_routes(&hypothetical, self.n_ways)?.is_empty() {
                self.add_safe_route(candidate.start, candidate.end)?;
                committed.push(candidate);
            }
        }
        Ok(committed)
    }
}
