//! Errors raised by the file-level driver. The stripper itself cannot fail.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DecommentError {
    /// The input path does not exist.
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// A directory input was given without an output directory.
    #[error("an output directory is required when the input is a directory: {}", .0.display())]
    MissingOutput(PathBuf),

    /// Standard input has no file name to place inside an output directory.
    #[error("output for standard input must be a file, not a directory: {}", .0.display())]
    StdinToDirectory(PathBuf),

    /// Writing into the input directory would overwrite the originals.
    #[error("output must differ from input: {}", .0.display())]
    SameInputOutput(PathBuf),

    /// The configuration file exists but could not be parsed.
    #[error("invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An `--exclude` pattern is not a valid glob.
    #[error("invalid exclude pattern: {0}")]
    InvalidGlob(#[from] globset::Error),

    /// Reading or writing a path failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DecommentError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
