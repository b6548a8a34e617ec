//! Scan a tree and write TODO reports

use anyhow::Context;

use todocheck::adapters::{FsSourceReader, GitVersionControl};
use todocheck::config::ScanConfig;
use todocheck::core::models::ModifiedFiles;
use todocheck::core::ports::{DecodePolicy, VersionControl};
use todocheck::output::{OutputMode, ScanReport};
use todocheck::report::write_report;
use todocheck::scanner::TreeScanner;

use crate::cli::Cli;

/// Scan the root, print matches and write the HTML reports
pub fn scan(cli: &Cli, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let markers = config.marker_pattern()?;
    let exclude = config.exclude_patterns()?;

    let ticket_prefix = markers.prefix().to_owned();
    let modified = modified_files(cli)?;
    log::debug!("modified files: {:?}", modified.sorted());

    let reader = FsSourceReader::new(config.scan.on_invalid_encoding);
    let scanner = TreeScanner::with_reader(&cli.root, markers, reader)?
        .comment_mode(config.scan.comment_mode)
        .exclude(exclude);
    let result = scanner.scan(&modified)?;
    log::info!(
        "scanned {} file(s) under {}, {} skipped",
        result.files_scanned,
        scanner.root().display(),
        result.files_skipped
    );

    let mut summary = ScanReport::new(scanner.root().to_path_buf(), &ticket_prefix, result);

    if !summary.matches.is_empty() {
        let path = write_report(&cli.destination, &config.report.all_name, &summary.matches)?;
        summary.report = Some(path);
    }
    if !summary.modified_matches.is_empty() {
        let path = write_report(
            &cli.destination,
            &config.report.modified_name,
            &summary.modified_matches,
        )?;
        summary.modified_report = Some(path);
    }

    summary.render(mode)
}

/// Defaults, then the config file, then command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::discover(&cli.root)?,
    };

    if let Some(prefix) = &cli.ticket_prefix {
        config.markers.ticket_prefix.clone_from(prefix);
    }
    if let Some(comment_mode) = cli.comment_mode {
        config.scan.comment_mode = comment_mode;
    }
    if cli.strict_encoding {
        config.scan.on_invalid_encoding = DecodePolicy::Fail;
    }
    Ok(config)
}

fn modified_files(cli: &Cli) -> anyhow::Result<ModifiedFiles> {
    let mut modified = cli.modified.as_deref().map(ModifiedFiles::parse).unwrap_or_default();
    if cli.staged {
        let staged = GitVersionControl::new()
            .staged_files(&cli.root)
            .context("--staged requires the root to be inside a git work tree")?;
        modified.extend_from(staged);
    }
    Ok(modified)
}
