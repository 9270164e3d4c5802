use crate::data_structures::{CollisionReport, Route};
use crate::error::Result;
use crate::junction::conflict::pair_collides;
use crate::junction::permissions::PermissionSet;
use crate::junction::route_pairs::route_pairs;

/// Finds every colliding pair of routes permitted by `green_lights`.
///
/// Every comparable pair is examined exactly once, so each count in the report
/// is the number of distinct routes the keyed route collides with. Routes are
/// reported in junction coordinates.
pub fn check_unsafe_routes(green_lights: &PermissionSet, n_ways: usize) -> Result<CollisionReport> {
    let routes = green_lights.routes(n_ways)?;
    let mut report = CollisionReport::default();

    for pair in route_pairs(&routes, n_ways) {
        if pair_collides(&pair, n_ways) {
            let (first, second) = pair.restore(n_ways);
            log::debug!("{}; {}", first, second);
            report.record(first, second);
        }
    }

    Ok(report)
}

/// Collision checks over a green-light set that can have lights withdrawn.
///
/// Nothing derived from the green lights is kept between calls; every check
/// starts again from the current lights.
#[derive(Debug, Clone)]
pub struct CollisionChecker {
    green_lights: PermissionSet,
    n_ways: usize,
}

impl CollisionChecker {
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

    pub fn routes(&self) -> Result<Vec<Route>> {
        self.green_lights.routes(self.n_ways)
    }

    pub fn check_unsafe_routes(&self) -> Result<CollisionReport> {
        let report = check_unsafe_routes(&self.green_lights, self.n_ways)?;
        log::info!(
            "Checked {} ways: {} colliding pairs across {} routes",
            self.n_ways,
            report.conflict_count(),
            report.unsafe_routes.len()
        );
        Ok(report)
    }

    /// Withdraws green light `offset` at `approach`.
    pub fn remove_green_light(&mut self, approach: usize, offset: usize) -> Result<()> {
        match self.green_lights.remove_offset(approach, offset) {
            Ok(()) => {
                log::info!("Removed green light {} at way {}", offset, approach);
                Ok(())
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }

    /// Withdraws the green light that permits `route`.
    pub fn remove_route(&mut self, route: Route) -> Result<()> {
        PermissionSet::check_route(&route, self.n_ways)?;
        self.remove_green_light(route.start, route.offset(self.n_ways))
    }
}
