use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use vdt_types::Table;

pub const SYLLABLES_FILE: &str = "syllables.json";
pub const MEANINGS_FILE: &str = "cuc_meanings.json";
pub const SCORES_FILE: &str = "cuc_scores.json";
pub const ELEMENTS_FILE: &str = "ngu_hanh_groups.json";
pub const DETAILS_FILE: &str = "cuc_details.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indent
    Pretty,
    Compact,
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error on {path}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot encode {path}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },

    #[error("Cannot parse {path}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}

impl OutputError {
    /// The file to read does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            OutputError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Write `table` as `dir/file_name`, creating `dir` if needed
pub fn write_table<T: Serialize>(
    dir: &Path,
    file_name: &str,
    table: &Table<T>,
    style: JsonStyle,
) -> Result<PathBuf, OutputError> {
    let path = dir.join(file_name);
    let io_err = |source| OutputError::Io {
        path: path.display().to_string(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_err)?;

    let json = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(table),
        JsonStyle::Compact => serde_json::to_string(table),
    }
    .map_err(|source| OutputError::Encode {
        path: path.display().to_string(),
        source,
    })?;

    fs::write(&path, json).map_err(io_err)?;
    tracing::debug!("Wrote {} entries to {}", table.len(), path.display());
    Ok(path)
}

pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Table<T>, OutputError> {
    let data = fs::read_to_string(path).map_err(|source| OutputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| OutputError::Decode {
        path: path.display().to_string(),
        source,
    })
}
