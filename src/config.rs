/// Optional `.decomment.toml` configuration, merged under the CLI flags.
use std::fs;
use std::path::{Path, PathBuf};

use decomment::strip::Strategy;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::DecommentError;

/// File looked up in the input directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".decomment.toml";

/// Settings as written in the configuration file. Every key is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub strategy: Option<Strategy>,
    pub recursive: Option<bool>,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    /// Where the settings were read from, if anywhere.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl FileConfig {
    pub fn parse(text: &str, path: &Path) -> Result<Self, DecommentError> {
        toml::from_str(text).map_err(|source| DecommentError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit config file, or `.decomment.toml` from `input_dir`
    /// when present. A missing default file is not an error; a missing
    /// explicit one is.
    pub fn load(explicit: Option<&Path>, input_dir: Option<&Path>) -> Result<Self, DecommentError> {
        let path: PathBuf = match (explicit, input_dir) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(dir)) => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
            (None, None) => return Ok(Self::default()),
        };
        let text = fs::read_to_string(&path).map_err(|err| DecommentError::io(&path, err))?;
        log::debug!("loaded config from {}", path.display());
        let mut config = Self::parse(&text, &path)?;
        config.source = Some(path);
        Ok(config)
    }
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub strategy: Strategy,
    pub recursive: bool,
    /// Lowercase, without the leading dot.
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub json: bool,
    pub verbose: bool,
    /// Canonical path of the loaded config file; never copied to the output.
    pub config_file: Option<PathBuf>,
}

impl Options {
    /// CLI values win over file values; list options are concatenated.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let extensions = file
            .extensions
            .iter()
            .chain(&cli.extensions)
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        let exclude = file.exclude.into_iter().chain(cli.exclude.iter().cloned()).collect();

        Self {
            strategy: cli.strategy.or(file.strategy).unwrap_or_default(),
            recursive: cli.recursive || file.recursive.unwrap_or(false),
            extensions,
            exclude,
            json: cli.json,
            verbose: cli.verbose,
            config_file: file.source.and_then(|path| fs::canonicalize(path).ok()),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
