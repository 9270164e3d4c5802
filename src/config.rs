// config.rs
//
// Driver configuration, read from a JSON file such as:
//
//     {
//         "green_lights": {"0": [1, 2], "1": [3], "2": [1, 3], "3": [2, 3]},
//         "n_ways": 4,
//         "verbose": true,
//         "remove_routes": [{"start": 2, "end": 1}],
//         "report_csv": "unsafe_routes.csv"
//     }

use crate::data_structures::Route;
use crate::error::Result as JunctionResult;
use crate::global_variables::DEFAULT_CONFIG_PATH;
use crate::junction::permissions::PermissionSet;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub green_lights: PermissionSet,
    /// Inferred from the highest keyed way when omitted.
    #[serde(default)]
    pub n_ways: Option<usize>,
    /// Print each colliding pair and route as `start -> end` lines.
    #[serde(default)]
    pub verbose: bool,
    /// Routes withdrawn one at a time, each followed by a fresh check.
    #[serde(default)]
    pub remove_routes: Vec<Route>,
    /// Keep committing safe candidates until none is left.
    #[serde(default)]
    pub commit_safe_routes: bool,
    #[serde(default)]
    pub report_csv: Option<PathBuf>,
}

impl AnalyzerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reads `path` if given, else `junction.json` if present, else the demo junction.
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => Self::from_path(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_path(DEFAULT_CONFIG_PATH),
            None => {
                log::info!("No config file, using the demo junction");
                Ok(Self::demo())
            }
        }
    }

    /// The four-way junction used when no config file is present.
    pub fn demo() -> Self {
        Self {
            green_lights: PermissionSet::from_lights([
                (0, vec![1, 2]),
                (1, vec![3]),
                (2, vec![1, 3]),
                (3, vec![2, 3]),
            ]),
            n_ways: Some(4),
            verbose: true,
            remove_routes: vec![Route::new(2, 1), Route::new(1, 0)],
            commit_safe_routes: false,
            report_csv: None,
        }
    }

    pub fn resolved_n_ways(&self) -> JunctionResult<usize> {
        self.green_lights.resolve_n_ways(self.n_ways)
    }
}
