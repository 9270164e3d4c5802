// junction/mod.rs
pub mod conflict;
pub mod permissions;
pub mod route_pairs;

pub use conflict::{collides, pair_collides};
pub use permissions::PermissionSet;
pub use route_pairs::route_pairs;
