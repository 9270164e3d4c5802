// monitoring/mod.rs
pub mod report_log;
