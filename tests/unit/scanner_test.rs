//! Tests for the tree scanner
//!
//! The scanner walks a real temporary tree; a failing reader stands in for
//! files that disappear or cannot be opened.

use std::path::Path;

use todocheck::adapters::FsSourceReader;
use todocheck::core::models::{MarkerPattern, Match, ModifiedFiles, ScanResult};
use todocheck::core::ports::{DecodePolicy, ReadError, SourceReader};
use todocheck::core::services::CommentMode;
use todocheck::scanner::{ScanError, TreeScanner};

use crate::common::{TestTree, default_markers};

fn scan(tree: &TestTree, modified: &str) -> ScanResult {
    TreeScanner::new(tree.path(), default_markers())
        .unwrap()
        .scan(&ModifiedFiles::parse(modified))
        .unwrap()
}

fn summary(matches: &[Match]) -> Vec<(String, usize)> {
    matches.iter().map(|m| (m.relative_path.clone(), m.line)).collect()
}

// =============================================================================
// SELECTION AND ORDER
// =============================================================================

#[test]
fn test_empty_directory_yields_nothing() {
    let tree = TestTree::empty();
    let result = scan(&tree, "");
    assert!(result.all_matches.is_empty());
    assert!(result.modified_matches.is_empty());
    assert_eq!(result.files_scanned, 0);
}

#[test]
fn test_mixed_tree_in_traversal_order() {
    let tree = TestTree::new();
    let result = scan(&tree, "");

    assert_eq!(
        summary(&result.all_matches),
        vec![
            ("Jenkinsfile".to_string(), 3),
            ("src/main.c".to_string(), 2),
            ("src/util.py".to_string(), 3),
            ("web/app.js".to_string(), 1),
            ("web/site.css".to_string(), 2),
        ]
    );
    // README.md is not an eligible file
    assert_eq!(result.files_scanned, 5);
}

#[test]
fn test_match_records_walked_path_and_trimmed_text() {
    let tree = TestTree::new();
    let result = scan(&tree, "");
    let jenkins = &result.all_matches[0];
    assert_eq!(jenkins.path, tree.path().join("Jenkinsfile"));
    assert_eq!(jenkins.text, "// TODO fix retry");
}

#[test]
fn test_jenkinsfile_scenario() {
    let tree = TestTree::empty();
    let mut content = String::new();
    for i in 1..10 {
        content.push_str(&format!("stage('{i}') {{}}\n"));
    }
    content.push_str("  // TODO fix retry  \n");
    tree.add_file("Jenkinsfile", &content);

    let result = scan(&tree, "");
    assert_eq!(result.all_matches.len(), 1);
    let m = &result.all_matches[0];
    assert_eq!((m.relative_path.as_str(), m.line, m.text.as_str()), ("Jenkinsfile", 10, "// TODO fix retry"));
}

#[test]
fn test_extension_match_is_case_sensitive() {
    let tree = TestTree::empty();
    tree.add_file("LOUD.PY", "# TODO shout\n");
    tree.add_file("quiet.py", "# TODO whisper\n");
    let result = scan(&tree, "");
    assert_eq!(summary(&result.all_matches), vec![("quiet.py".to_string(), 1)]);
}

#[test]
fn test_hidden_directories_are_scanned() {
    let tree = TestTree::empty();
    tree.add_file(".github/workflows/ci.yml", "# TODO cache deps\n");
    let result = scan(&tree, "");
    assert_eq!(result.all_matches[0].relative_path, ".github/workflows/ci.yml");
}

#[test]
fn test_carriage_return_only_line_endings() {
    let tree = TestTree::empty();
    tree.add_bytes("old.c", b"int x;\r// TODO mac line\r");
    let result = scan(&tree, "old.c");
    assert_eq!(summary(&result.all_matches), vec![("old.c".to_string(), 2)]);
    assert_eq!(result.modified_matches[0].text, "// TODO mac line");
}

#[cfg(unix)]
#[test]
fn test_file_symlinks_scanned_and_dir_symlinks_not_followed() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::empty();
    tree.add_file("real/a.c", "// TODO once\n");
    symlink(tree.path().join("real/a.c"), tree.path().join("link.c")).unwrap();
    symlink(tree.path().join("real"), tree.path().join("zlinkdir")).unwrap();

    let result = scan(&tree, "link.c");
    assert_eq!(
        summary(&result.all_matches),
        vec![("link.c".to_string(), 1), ("real/a.c".to_string(), 1)]
    );
    assert_eq!(summary(&result.modified_matches), vec![("link.c".to_string(), 1)]);
    assert_eq!(result.files_scanned, 2);
}

// =============================================================================
// MODIFIED FILES
// =============================================================================

#[test]
fn test_modified_file_appears_in_both_sets() {
    let tree = TestTree::empty();
    tree.add_file("pkg/tool.py", "import sys\n\n# USGVINISPZ-4521 refactor\n");

    let result = scan(&tree, "pkg/tool.py");
    assert_eq!(result.all_matches.len(), 1);
    assert_eq!(result.modified_matches, result.all_matches);
    assert_eq!(result.modified_matches[0].line, 3);

    let result = scan(&tree, "other.py");
    assert_eq!(result.all_matches.len(), 1);
    assert!(result.modified_matches.is_empty());
}

#[test]
fn test_modified_subset_preserves_order() {
    let tree = TestTree::new();
    let result = scan(&tree, "web/site.css Jenkinsfile src/util.py");
    assert_eq!(
        summary(&result.modified_matches),
        vec![
            ("Jenkinsfile".to_string(), 3),
            ("src/util.py".to_string(), 3),
            ("web/site.css".to_string(), 2),
        ]
    );
}

#[test]
fn test_modified_path_must_be_relative_to_root() {
    let tree = TestTree::new();
    let absolute = tree.path().join("src/util.py");
    let result = scan(&tree, &absolute.display().to_string());
    assert!(result.modified_matches.is_empty());
}

// =============================================================================
// DECODING AND FAILURES
// =============================================================================

#[test]
fn test_invalid_utf8_is_replaced_by_default() {
    let tree = TestTree::empty();
    tree.add_bytes("bad.c", b"\xff\xfe\n// TODO still found\n");
    let result = scan(&tree, "");
    assert_eq!(summary(&result.all_matches), vec![("bad.c".to_string(), 2)]);
}

#[test]
fn test_strict_decoding_skips_file_and_continues() {
    let tree = TestTree::empty();
    tree.add_bytes("a_bad.c", b"// TODO \xff\n");
    tree.add_file("b_good.c", "// TODO fine\n");

    let reader = FsSourceReader::new(DecodePolicy::Fail);
    let result = TreeScanner::with_reader(tree.path(), default_markers(), reader)
        .unwrap()
        .scan(&ModifiedFiles::default())
        .unwrap();

    assert_eq!(summary(&result.all_matches), vec![("b_good.c".to_string(), 1)]);
    assert_eq!(result.files_scanned, 1);
    assert_eq!(result.files_skipped, 1);
}

/// Reader that fails for one file name
struct FlakyReader {
    fail_on: &'static str,
}

impl SourceReader for FlakyReader {
    fn policy(&self) -> DecodePolicy {
        DecodePolicy::Replace
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>, ReadError> {
        if path.ends_with(self.fail_on) {
            return Err(ReadError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            });
        }
        FsSourceReader::default().read_lines(path)
    }
}

#[test]
fn test_vanished_root_is_an_error() {
    let tree = TestTree::empty();
    tree.add_file("project/a.c", "// TODO\n");
    let root = tree.path().join("project");
    let scanner = TreeScanner::new(&root, default_markers()).unwrap();
    std::fs::remove_dir_all(&root).unwrap();

    let err = scanner.scan(&ModifiedFiles::default()).unwrap_err();
    assert!(matches!(err, ScanError::Walk { .. }));
}

#[test]
fn test_unreadable_file_does_not_stop_scan() {
    let tree = TestTree::new();
    let reader = FlakyReader { fail_on: "main.c" };
    let scanner = TreeScanner::with_reader(tree.path(), default_markers(), reader).unwrap();
    let result = scanner.scan(&ModifiedFiles::default()).unwrap();

    assert_eq!(result.files_skipped, 1);
    assert_eq!(result.files_scanned, 4);
    assert!(result.all_matches.iter().all(|m| m.relative_path != "src/main.c"));
    assert_eq!(result.all_matches.len(), 4);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_custom_ticket_prefix() {
    let tree = TestTree::empty();
    tree.add_file("a.js", "// ABCDE-123 flaky\n// USGVINISPZ-1 other project\n");
    let result = TreeScanner::new(tree.path(), MarkerPattern::new("ABCDE").unwrap())
        .unwrap()
        .scan(&ModifiedFiles::default())
        .unwrap();
    assert_eq!(summary(&result.all_matches), vec![("a.js".to_string(), 1)]);
}

#[test]
fn test_block_aware_mode_finds_unstarred_body() {
    let tree = TestTree::empty();
    tree.add_file("lib.h", "/*\n   TODO: hidden\n*/\nint x;\n");

    let per_line = scan(&tree, "");
    assert!(per_line.all_matches.is_empty());

    let aware = TreeScanner::new(tree.path(), default_markers())
        .unwrap()
        .comment_mode(CommentMode::BlockAware)
        .scan(&ModifiedFiles::default())
        .unwrap();
    assert_eq!(summary(&aware.all_matches), vec![("lib.h".to_string(), 2)]);
}
