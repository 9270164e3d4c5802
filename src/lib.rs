//! Conflict analysis for routes through a multi-approach junction.
//!
//! Approaches are numbered `0..n_ways` clockwise. A green light at approach `a`
//! with offset `k` permits traffic from `a` to `(a + k) % n_ways`. The crate finds
//! every pair of permitted routes whose paths cross, and every route that could
//! still be permitted without introducing a crossing.

pub mod config;
pub mod control_system;
pub mod data_structures;
pub mod error;
pub mod global_variables;
pub mod junction;
pub mod monitoring;
pub mod simulation_engine;

pub use control_system::collision_checker::{check_unsafe_routes, CollisionChecker};
pub use control_system::junction_controller::JunctionController;
pub use control_system::safe_route_finder::{find_safe_candidates, SafeRouteFinder};
pub use data_structures::{CollisionReport, Route, RoutePair};
pub use error::{JunctionError, Result};
pub use junction::permissions::PermissionSet;
