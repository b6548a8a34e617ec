//! File-type table
//!
//! Maps a file name to the comment grammar used to recognise comment lines.
//! The table is closed and immutable: a file either resolves to one of the
//! three grammars or is not scanned at all.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use todocheck::core::models::{CommentGrammar, FileType};
//!
//! let ft = FileType::for_path(Path::new("src/main.cpp")).unwrap();
//! assert_eq!(ft.grammar(), CommentGrammar::SlashStyle);
//!
//! let ft = FileType::for_path(Path::new("ci/Jenkinsfile")).unwrap();
//! assert_eq!(ft, FileType::Jenkinsfile);
//!
//! assert!(FileType::for_path(Path::new("README.md")).is_none());
//! ```

use std::path::Path;

/// Base-name prefix that marks a Jenkins pipeline file
pub const JENKINSFILE_PREFIX: &str = "Jenkinsfile";

/// Line-prefix grammar that qualifies a line as a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentGrammar {
    /// `//`, `/*` or `*` (C family, Groovy, JavaScript, C#)
    SlashStyle,
    /// `/*` or `*` only (CSS, JSON)
    BlockOnly,
    /// `#` (Python, YAML, PowerShell, batch)
    HashStyle,
}

impl CommentGrammar {
    /// Line prefixes accepted by this grammar
    #[must_use]
    pub const fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::SlashStyle => &["//", "/*", "*"],
            Self::BlockOnly => &["/*", "*"],
            Self::HashStyle => &["#"],
        }
    }

    /// Whether this grammar has `/* ... */` block comments
    #[must_use]
    pub const fn has_block_comments(self) -> bool {
        matches!(self, Self::SlashStyle | Self::BlockOnly)
    }
}

/// A recognised file type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Identified by its extension (stored with the leading dot)
    Extension(&'static str, CommentGrammar),
    /// Base name starts with `Jenkinsfile`, whatever the extension
    Jenkinsfile,
}

/// Extension table, leading dot included. Matching is case-sensitive.
const EXTENSIONS: &[(&str, CommentGrammar)] = &[
    (".c", CommentGrammar::SlashStyle),
    (".cpp", CommentGrammar::SlashStyle),
    (".h", CommentGrammar::SlashStyle),
    (".hpp", CommentGrammar::SlashStyle),
    (".groovy", CommentGrammar::SlashStyle),
    (".js", CommentGrammar::SlashStyle),
    (".cs", CommentGrammar::SlashStyle),
    (".css", CommentGrammar::BlockOnly),
    (".json", CommentGrammar::BlockOnly),
    (".py", CommentGrammar::HashStyle),
    (".yml", CommentGrammar::HashStyle),
    (".yaml", CommentGrammar::HashStyle),
    (".ps1", CommentGrammar::HashStyle),
    (".bat", CommentGrammar::HashStyle),
];

impl FileType {
    /// Resolve the file type of a path from its base name
    ///
    /// The `Jenkinsfile` name prefix wins over the extension, so
    /// `Jenkinsfile.yml` is treated as a pipeline script.
    #[must_use]
    pub fn for_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.starts_with(JENKINSFILE_PREFIX) {
            return Some(Self::Jenkinsfile);
        }
        let ext = path.extension()?.to_str()?;
        Self::for_extension(&format!(".{ext}"))
    }

    /// Look up an extension given with its leading dot
    #[must_use]
    pub fn for_extension(ext: &str) -> Option<Self> {
        EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|&(known, grammar)| Self::Extension(known, grammar))
    }

    /// The comment grammar for this file type
    #[must_use]
    pub const fn grammar(self) -> CommentGrammar {
        match self {
            Self::Extension(_, grammar) => grammar,
            Self::Jenkinsfile => CommentGrammar::SlashStyle,
        }
    }
}
