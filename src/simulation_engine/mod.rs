// simulation_engine/mod.rs
pub mod permission_generation;
