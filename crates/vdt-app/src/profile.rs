use std::path::{Path, PathBuf};

use vdt_config::Config;
use vdt_config::paths::process_env;

/// Layered config: file (or built-in defaults), then env, then CLI flags
pub fn load_config(
    file: Option<&Path>,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<Config> {
    load_config_with(file, input, output_dir, process_env)
}

pub fn load_config_with(
    file: Option<&Path>,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let mut config = match file {
        Some(path) => Config::from_file(path, lookup)?,
        None => {
            tracing::debug!("No config file given, using defaults");
            Config::from_env(lookup)
        }
    };

    if let Some(input) = input {
        config.paths.input = input;
    }
    if let Some(output_dir) = output_dir {
        config.paths.output_dir = output_dir;
    }

    Ok(config)
}
