//! Modified file set
//!
//! Paths are compared as `/`-separated strings relative to the scan root.

use std::collections::HashSet;

/// Set of files changed in the current change-set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifiedFiles {
    paths: HashSet<String>,
}

impl ModifiedFiles {
    /// Build from a whitespace-separated list, as passed on the command line
    #[must_use]
    pub fn parse(list: &str) -> Self {
        list.split_whitespace().collect()
    }

    /// Whether a relative path is in the set
    #[must_use]
    pub fn contains(&self, relative_path: &str) -> bool {
        self.paths.contains(&normalize(relative_path))
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if no files are listed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Add every entry of another set
    pub fn extend_from(&mut self, other: Self) {
        self.paths.extend(other.paths);
    }

    /// Entries in sorted order
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.paths.iter().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl<S: AsRef<str>> FromIterator<S> for ModifiedFiles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let paths = iter
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();
        Self { paths }
    }
}

fn normalize(path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    let mut path = path.as_str();
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path.to_string()
}
