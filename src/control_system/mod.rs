// control_system/mod.rs
pub mod collision_checker;
pub mod junction_controller;
pub mod safe_route_finder;
