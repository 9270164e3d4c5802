// Driver config file used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "junction.json";

// Smallest junction with two distinct ways.
pub const MIN_WAYS: usize = 2;
