use serde::{Deserialize, Serialize};

fn default_pretty() -> bool {
    true
}

fn default_compact_syllables() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// Two-space indented JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// syllables.json is by far the largest table, keep it on one line
    #[serde(default = "default_compact_syllables")]
    pub compact_syllables: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            compact_syllables: default_compact_syllables(),
        }
    }
}
