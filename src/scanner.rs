//! Tree scanner - walks a source tree and collects marker comments
//!
//! The scanner selects files by name, reads each one through a
//! [`SourceReader`], and records every comment line that carries a marker.
//! Files and entries below the root that cannot be read are logged and
//! skipped; only a bad or unreadable root aborts the scan.
//!
//! # Examples
//!
//! ```no_run
//! use todocheck::core::models::{MarkerPattern, ModifiedFiles};
//! use todocheck::scanner::TreeScanner;
//!
//! let markers = MarkerPattern::new("ABC").unwrap();
//! let scanner = TreeScanner::new("repo", markers).unwrap();
//! let result = scanner.scan(&ModifiedFiles::parse("src/main.c")).unwrap();
//! for m in &result.modified_matches {
//!     println!("{m}");
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::adapters::FsSourceReader;
use crate::core::models::{FileType, MarkerPattern, Match, ModifiedFiles, ScanResult};
use crate::core::ports::SourceReader;
use crate::core::services::{CommentMode, match_lines};

/// Errors that abort a scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The root itself could not be walked
    #[error("cannot walk {path}")]
    Walk {
        /// Scan root
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },
}

/// Walks a tree and collects marker comments
#[derive(Debug)]
pub struct TreeScanner<R = FsSourceReader> {
    root: PathBuf,
    markers: MarkerPattern,
    mode: CommentMode,
    exclude: Vec<glob::Pattern>,
    reader: R,
}

impl TreeScanner<FsSourceReader> {
    /// Create a scanner rooted at `root`, reading files with lossy decoding
    pub fn new(root: impl AsRef<Path>, markers: MarkerPattern) -> Result<Self, ScanError> {
        Self::with_reader(root, markers, FsSourceReader::default())
    }
}

impl<R: SourceReader> TreeScanner<R> {
    /// Create a scanner that reads files through `reader`
    pub fn with_reader(
        root: impl AsRef<Path>,
        markers: MarkerPattern,
        reader: R,
    ) -> Result<Self, ScanError> {
        let root = root.as_ref().to_path_buf();

        if !root.exists() {
            return Err(ScanError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root));
        }

        Ok(Self {
            root,
            markers,
            mode: CommentMode::default(),
            exclude: Vec::new(),
            reader,
        })
    }

    /// Set how comment lines are recognised
    #[must_use]
    pub const fn comment_mode(mut self, mode: CommentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Leave out files whose relative path matches any of these globs
    #[must_use]
    pub fn exclude(mut self, patterns: Vec<glob::Pattern>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the whole tree and return all matches plus the modified subset
    ///
    /// Directories are visited in file-name order, so the result is
    /// reproducible for a given tree.
    pub fn scan(&self, modified: &ModifiedFiles) -> Result<ScanResult, ScanError> {
        let mut result = ScanResult::default();
        log::debug!(
            "scanning {} ({} comments, {:?} decoding)",
            self.root.display(),
            self.mode,
            self.reader.policy()
        );

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::Walk {
                        path: self.root.clone(),
                        source: e,
                    });
                },
                Err(e) => {
                    log::warn!("skipping unreadable entry: {e}");
                    continue;
                },
            };
            if !Self::is_file(&entry) {
                continue;
            }

            let path = entry.path();
            let Some(file_type) = FileType::for_path(path) else {
                continue;
            };
            let relative = self.relative_path(path);
            if self.is_excluded(&relative) {
                log::debug!("excluded {relative}");
                continue;
            }

            let lines = match self.reader.read_lines(path) {
                Ok(lines) => lines,
                Err(e) => {
                    log::warn!("skipping file: {e}");
                    result.files_skipped += 1;
                    continue;
                },
            };
            result.files_scanned += 1;

            let is_modified = modified.contains(&relative);
            let found = match_lines(
                lines.iter().map(String::as_str),
                Some(file_type.grammar()),
                self.mode,
                &self.markers,
            );
            log::debug!("{relative}: {} line(s), {} marker(s)", lines.len(), found.len());

            for (line_no, text) in found {
                let m = Match::new(path.to_path_buf(), relative.clone(), line_no, text);
                result.push(m, is_modified);
            }
        }

        Ok(result)
    }

    /// Regular files, and symlinks that resolve to regular files
    fn is_file(entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }

    /// Path relative to the root, `/`-separated
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(relative))
    }
}
