use std::fs;
use std::path::Path;

use super::FileStatus;
use crate::error::DecommentError;

/// Number of leading bytes inspected for a NUL when sniffing binary files.
pub const SNIFF_LEN: usize = 512;

/// A file's contents, classified before stripping.
#[derive(Debug, PartialEq)]
pub enum Source {
    Text(String),
    /// A NUL byte within the first [`SNIFF_LEN`] bytes.
    Binary,
    /// Not valid UTF-8; `valid_up_to` is the byte offset of the first bad sequence.
    NotUtf8 { valid_up_to: usize },
}

impl Source {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        if bytes.iter().take(SNIFF_LEN).any(|&b| b == 0) {
            return Source::Binary;
        }
        match String::from_utf8(bytes) {
            Ok(text) => Source::Text(text),
            Err(err) => Source::NotUtf8 {
                valid_up_to: err.utf8_error().valid_up_to(),
            },
        }
    }

    /// The text of a stripable file. Anything else is logged as skipped and
    /// turned into the matching status.
    pub fn into_text(self, path: &Path) -> Result<String, FileStatus> {
        match self {
            Source::Text(text) => Ok(text),
            Source::Binary => {
                log::warn!("{}: binary file, skipped", path.display());
                Err(FileStatus::SkippedBinary)
            }
            Source::NotUtf8 { valid_up_to } => {
                log::warn!(
                    "{}: invalid UTF-8 at byte {valid_up_to}, skipped",
                    path.display()
                );
                Err(FileStatus::SkippedEncoding)
            }
        }
    }
}

/// Read and classify a file. Returns the classification and the file size.
pub fn read_source(path: &Path) -> Result<(Source, usize), DecommentError> {
    let bytes = fs::read(path).map_err(|err| DecommentError::io(path, err))?;
    let len = bytes.len();
    Ok((Source::from_bytes(bytes), len))
}
