use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::control_system::collision_checker::check_unsafe_routes;
use crate::control_system::safe_route_finder::find_safe_candidates;
use crate::data_structures::{CollisionReport, Route};
use crate::error::Result;
use crate::junction::permissions::PermissionSet;

/// A green-light set shared between threads.
///
/// Clones share the same set. Each mutate-then-recheck sequence holds the lock
/// from the mutation until its report is built, so no other caller can observe
/// or change the set in between.
#[derive(Debug, Clone)]
pub struct JunctionController {
    green_lights: Arc<Mutex<PermissionSet>>,
    n_ways: usize,
}

impl JunctionController {
    pub fn new(green_lights: PermissionSet, n_ways: Option<usize>) -> Result<Self> {
        let n_ways = green_lights.resolve_n_ways(n_ways)?;
        green_lights.validate(n_ways)?;
        Ok(Self {
            green_lights: Arc::new(Mutex::new(green_lights)),
            n_ways,
        })
    }

    pub fn n_ways(&self) -> usize {
        self.n_ways
    }

    // Mutations validate before touching the set, so a poisoned lock still
    // guards a consistent set.
    fn lock(&self) -> MutexGuard<'_, PermissionSet> {
        self.green_lights
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Independent copy of the current green lights.
    pub fn snapshot(&self) -> PermissionSet {
        self.lock().clone()
    }

    pub fn check_unsafe_routes(&self) -> Result<CollisionReport> {
        check_unsafe_routes(&self.lock(), self.n_ways)
    }

    pub fn find_safe_candidates(&self) -> Result<Vec<Route>> {
        find_safe_candidates(&self.lock(), self.n_ways)
    }

    /// Withdraws the light permitting `route` and re-checks under the same lock.
    pub fn remove_and_recheck(&self, route: Route) -> Result<CollisionReport> {
        PermissionSet::check_route(&route, self.n_ways)?;
        let mut green_lights = self.lock();
        green_lights.remove_offset(route.start, route.offset(self.n_ways))?;
        log::info!("Removed route {}", route);
        check_unsafe_routes(&green_lights, self.n_ways)
    }

    /// Permits `route` and re-checks under the same lock.
    pub fn commit_and_recheck(&self, route: Route) -> Result<CollisionReport> {
        let mut green_lights = self.lock();
        green_lights.add_route(route, self.n_ways)?;
        log::info!("Added route {}", route);
        check_unsafe_routes(&green_lights, self.n_ways)
    }

    /// Permits `route` only if the set stays collision-free. Proposal and commit
    /// happen under one lock, so concurrent callers cannot both slip in
    /// routes that collide with each other.
    pub fn commit_if_safe(&self, route: Route) -> Result<bool> {
        PermissionSet::check_route(&route, self.n_ways)?;
        let mut green_lights = self.lock();
        if green_lights.contains_route(&route, self.n_ways) {
            return Ok(false);
        }
        let hypothetical = green_lights.with_route(route, self.n_ways);
        if !check_unsafe_routes(&hypothetical, self.n_ways)?.is_empty() {
            return Ok(false);
        }
        green_lights.add_route(route, self.n_ways)?;
        log::info!("Added route {}", route);
        Ok(true)
    }
}
