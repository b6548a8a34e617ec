//! Tests for HTML report writing

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use todocheck::core::models::Match;
use todocheck::report::{HtmlReport, ReportError, write_report};

fn matches(n: usize) -> Vec<Match> {
    (1..=n)
        .map(|i| Match::new(PathBuf::from(format!("root/f{i}.py")), format!("f{i}.py"), i, "# TODO"))
        .collect()
}

#[test]
fn test_row_count_is_matches_plus_header() {
    for n in [0, 1, 7] {
        let rows = matches(n);
        let html = HtmlReport::new("todo_report.html", &rows).render();
        assert_eq!(html.matches("<tr>").count(), n + 1, "n = {n}");
        assert_eq!(html.matches("<td>").count(), n * 3);
    }
}

#[test]
fn test_columns_in_order() {
    let html = HtmlReport::new("r", &matches(1)).render();
    let file = html.find("<th>File</th>").unwrap();
    let line = html.find("<th>Line</th>").unwrap();
    let comment = html.find("<th>Comment</th>").unwrap();
    assert!(file < line && line < comment);
}

#[test]
fn test_write_creates_destination() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("out/reports");

    let path = write_report(&dest, "todo_report.html", &matches(2)).unwrap();
    assert_eq!(path, dest.join("todo_report.html"));

    let html = fs::read_to_string(path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<td>root/f2.py</td><td>2</td><td># TODO</td>"));
}

#[test]
fn test_write_overwrites_existing_report() {
    let temp = TempDir::new().unwrap();
    write_report(temp.path(), "r.html", &matches(3)).unwrap();
    let path = write_report(temp.path(), "r.html", &matches(1)).unwrap();
    let html = fs::read_to_string(path).unwrap();
    assert_eq!(html.matches("<tr>").count(), 2);
}

#[test]
fn test_destination_blocked_by_file_is_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("reports");
    fs::write(&blocker, "not a directory").unwrap();

    let err = write_report(&blocker, "todo_report.html", &matches(1)).unwrap_err();
    assert!(matches!(err, ReportError::CreateDir { .. }));
}
