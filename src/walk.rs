use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Decides which files of the input tree are left out of a run.
///
/// With a non-empty extension list only files carrying one of those
/// extensions are processed. Exclude globs are matched against the path
/// relative to the walk root and against the bare file name.
pub struct ExcludeFilter {
    include_ext: Vec<String>,
    globs: GlobSet,
}

impl ExcludeFilter {
    pub fn new(include_ext: &[String], exclude_globs: &[String]) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_globs {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            include_ext: include_ext.iter().map(|e| e.to_ascii_lowercase()).collect(),
            globs: builder.build()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.include_ext.is_empty() && self.globs.is_empty()
    }

    pub fn excludes_file(&self, path: &Path, root: &Path) -> bool {
        if self.is_empty() {
            return false;
        }
        if !self.include_ext.is_empty() {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase);
            if !ext.is_some_and(|e| self.include_ext.contains(&e)) {
                return true;
            }
        }
        if self.globs.is_empty() {
            return false;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.globs.is_match(relative)
            || path.file_name().is_some_and(|name| self.globs.is_match(name))
    }
}

/// Build a directory walker over every file under `root` (hidden files and
/// ignored files included), skipping `.git` and the `skip_dir` directory.
///
/// Without `recursive` only the top level of `root` is visited. Entries are
/// yielded in file-name order.
pub fn walk(root: &Path, recursive: bool, skip_dir: Option<PathBuf>) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    if !recursive {
        builder.max_depth(Some(1));
    }
    builder
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if entry.file_name() == ".git" {
                    return false;
                }
                if entry.depth() > 0
                    && let Some(skip) = &skip_dir
                    && fs::canonicalize(entry.path()).is_ok_and(|p| p == *skip)
                {
                    return false;
                }
            }
            true
        })
        .build()
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
