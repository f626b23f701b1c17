use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::layout::LayoutsConfig;
use self::output::OutputConfig;
use self::paths::PathsConfig;

pub mod layout;
pub mod output;
pub mod paths;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config {path}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub output: OutputConfig,
    pub layouts: LayoutsConfig,
}

impl Config {
    /// Built-in defaults with environment overrides applied
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        config.paths.apply_env(lookup);
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn from_file(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.paths.apply_env(lookup);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"output": {{"pretty": false}}, "layouts": {{"elements": {{"first_row": 7}}}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path(), |_| None).unwrap();
        assert!(!config.output.pretty);
        assert!(config.output.compact_syllables);
        assert_eq!(config.layouts.elements.first_row, 7);
        assert_eq!(config.layouts.elements.sheet, "DT");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"paths": {{"input": "from-file.xlsx", "output_dir": "file-out"}}}}"#
        )
        .unwrap();

        let config = Config::from_file(file.path(), |key| match key {
            "VDT_INPUT" => Some("from-env.xlsx".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.paths.input, std::path::PathBuf::from("from-env.xlsx"));
        assert_eq!(config.paths.output_dir, std::path::PathBuf::from("file-out"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("nope.json"), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Config::from_file(file.path(), |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        // the serde message is left to the source chain
        assert!(!err.to_string().contains("expected"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
