use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_input() -> PathBuf {
    PathBuf::from("Việt Danh Tính - 2A.xlsx")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PathsConfig {
    /// Source workbook
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Directory the JSON tables are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl PathsConfig {
    /// Override from `VDT_INPUT` / `VDT_OUTPUT_DIR` when `lookup` has them.
    /// Pass [`process_env`] to read the real environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(input) = lookup("VDT_INPUT") {
            self.input = PathBuf::from(input);
        }
        if let Some(output_dir) = lookup("VDT_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }
    }
}

/// Variable lookup backed by the process environment
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
        }
    }
}
