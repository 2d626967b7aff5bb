mod report;
mod source;

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use decomment::strip::{Strategy, strip_with};
use serde::Serialize;

use crate::config::Options;
use crate::error::DecommentError;
use crate::walk::{self, ExcludeFilter};
use report::{print_json, print_report};
use source::read_source;

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Written,
    SkippedBinary,
    SkippedEncoding,
    Failed { error: String },
}

#[derive(Debug, Serialize)]
pub struct FileOutcome {
    /// Path relative to the input directory.
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
    pub bytes_in: usize,
    pub bytes_out: usize,
}

/// All per-file outcomes of a directory run, in walk order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.status)).count()
    }

    pub fn written(&self) -> usize {
        self.count(|s| *s == FileStatus::Written)
    }

    pub fn skipped_binary(&self) -> usize {
        self.count(|s| *s == FileStatus::SkippedBinary)
    }

    pub fn skipped_encoding(&self) -> usize {
        self.count(|s| *s == FileStatus::SkippedEncoding)
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed { .. }))
    }

    pub fn bytes_in(&self) -> usize {
        self.files.iter().map(|f| f.bytes_in).sum()
    }

    pub fn bytes_out(&self) -> usize {
        self.files.iter().map(|f| f.bytes_out).sum()
    }
}

/// Strip one file into `dst`, creating parent directories as needed.
fn clean_file(
    src: &Path,
    dst: &Path,
    relative: &Path,
    strategy: Strategy,
) -> Result<FileOutcome, DecommentError> {
    let (source, bytes_in) = read_source(src)?;
    let (status, bytes_out) = match source.into_text(src) {
        Ok(text) => {
            let clean = strip_with(&text, strategy);
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent).map_err(|err| DecommentError::io(parent, err))?;
            }
            fs::write(dst, &clean).map_err(|err| DecommentError::io(dst, err))?;
            (FileStatus::Written, clean.len())
        }
        Err(skipped) => (skipped, 0),
    };
    Ok(FileOutcome {
        path: relative.to_path_buf(),
        status,
        bytes_in,
        bytes_out,
    })
}

/// Strip every file of `input` into `output`, mirroring relative paths.
pub fn clean_dir(
    input: &Path,
    output: &Path,
    opts: &Options,
) -> Result<RunSummary, DecommentError> {
    fs::create_dir_all(output).map_err(|err| DecommentError::io(output, err))?;
    let input_root = fs::canonicalize(input).map_err(|err| DecommentError::io(input, err))?;
    let output_root = fs::canonicalize(output).map_err(|err| DecommentError::io(output, err))?;
    if input_root == output_root {
        return Err(DecommentError::SameInputOutput(output.to_path_buf()));
    }

    let filter = ExcludeFilter::new(&opts.extensions, &opts.exclude)?;
    let mut summary = RunSummary::default();

    for entry in walk::walk(input, opts.recursive, Some(output_root)) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("{err}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let file_path = entry.path();
        if opts.config_file.as_ref().is_some_and(|cfg| {
            cfg.file_name() == Some(entry.file_name())
                && fs::canonicalize(file_path).is_ok_and(|p| p == *cfg)
        }) {
            log::debug!("{}: config file, not copied", file_path.display());
            continue;
        }
        if filter.excludes_file(file_path, input) {
            log::debug!("{}: excluded", file_path.display());
            continue;
        }

        let relative = file_path.strip_prefix(input).unwrap_or(file_path);
        log::info!("{}", relative.display());

        let dst = output.join(relative);
        let outcome = match clean_file(file_path, &dst, relative, opts.strategy) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("{err}");
                FileOutcome {
                    path: relative.to_path_buf(),
                    status: FileStatus::Failed {
                        error: err.to_string(),
                    },
                    bytes_in: 0,
                    bytes_out: 0,
                }
            }
        };
        summary.files.push(outcome);
    }

    Ok(summary)
}

/// Strip a single file or stdin (`-`) into `output`, or to stdout when no
/// output is given. An existing directory as `output` receives a same-named
/// file; stdin has no name, so it needs a file path.
fn clean_single(
    input: &Path,
    output: Option<&Path>,
    strategy: Strategy,
) -> Result<bool, Box<dyn Error>> {
    let from_stdin = input.as_os_str() == "-";
    if from_stdin && let Some(out) = output.filter(|out| out.is_dir()) {
        return Err(DecommentError::StdinToDirectory(out.to_path_buf()).into());
    }

    let text = if from_stdin {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        let (source, _) = read_source(input)?;
        match source.into_text(input) {
            Ok(text) => text,
            Err(_) => return Ok(false),
        }
    };

    let clean = strip_with(&text, strategy);
    match output {
        Some(out) => {
            let target = match input.file_name() {
                Some(name) if out.is_dir() => out.join(name),
                _ => out.to_path_buf(),
            };
            if !from_stdin && fs::canonicalize(&target).ok() == fs::canonicalize(input).ok() {
                return Err(DecommentError::SameInputOutput(target).into());
            }
            fs::write(&target, clean).map_err(|err| DecommentError::io(&target, err))?;
        }
        None => io::stdout().lock().write_all(clean.as_bytes())?,
    }
    Ok(true)
}

/// Entry point of a run. Returns `Ok(false)` when some file could not be
/// processed; fatal problems are returned as errors.
pub fn run(input: &Path, output: Option<&Path>, opts: &Options) -> Result<bool, Box<dyn Error>> {
    if input.as_os_str() != "-" && !input.exists() {
        return Err(DecommentError::InputNotFound(input.to_path_buf()).into());
    }
    if !input.is_dir() {
        return clean_single(input, output, opts.strategy);
    }

    let output = output.ok_or_else(|| DecommentError::MissingOutput(input.to_path_buf()))?;
    let summary = clean_dir(input, output, opts)?;

    if opts.json {
        print_json(&summary, opts.strategy)?;
    } else if summary.files.is_empty() {
        println!("No files found.");
    } else {
        print_report(&summary, opts.strategy, opts.verbose);
    }

    Ok(summary.failed() == 0)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
