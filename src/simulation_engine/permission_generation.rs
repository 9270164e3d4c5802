// permission_generation.rs
//
// Random green-light sets for exercising the collision checks. One generator
// draws lights independently (and usually produces collisions); the other
// builds a collision-free set by admitting shuffled routes one at a time.

use crate::control_system::collision_checker::check_unsafe_routes;
use crate::data_structures::Route;
use crate::error::Result;
use crate::junction::permissions::PermissionSet;
use rand::seq::SliceRandom;
use rand::Rng;

/// Turns on each possible green light with probability `density`.
pub fn random_permissions<R: Rng + ?Sized>(
    rng: &mut R,
    n_ways: usize,
    density: f64,
) -> PermissionSet {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    PermissionSet::from_lights((0..n_ways).map(|approach| {
        let offsets: Vec<usize> = (1..n_ways).filter(|_| rng.random_bool(density)).collect();
        (approach, offsets)
    }))
}

/// A maximal collision-free set: every route is offered once in random order
/// and kept if the set stays collision-free.
pub fn random_conflict_free<R: Rng + ?Sized>(rng: &mut R, n_ways: usize) -> Result<PermissionSet> {
    let mut routes: Vec<Route> = (0..n_ways)
        .flat_map(|start| (0..n_ways).map(move |end| Route::new(start, end)))
        .filter(|route| route.start != route.end)
        .collect();
    routes.shuffle(rng);

    let mut green_lights = PermissionSet::new();
    for route in routes {
        let hypothetical = green_lights.with_route(route, n_ways);
        if check_unsafe_routes(&hypothetical, n_ways)?.is_empty() {
            green_lights = hypothetical;
        }
    }
    Ok(green_lights)
}
