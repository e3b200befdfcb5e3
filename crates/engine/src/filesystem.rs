use crate::config::ScanConfig;
use crate::error::Result;
use crate::processor;
use ignore::{DirEntry, WalkBuilder};
use log::{debug, trace};
use sloc_core::report::{FileResult, ScanReport};
use std::path::Path;

/// Sequential depth-first walk of `config.root`.
///
/// Entries whose base name is ignored are pruned with their subtree.
/// Files with an unsupported extension are skipped; any other error aborts
/// the scan.
///
/// # Errors
///
/// [`crate::error::EngineError::Traversal`] when a directory cannot be
/// enumerated (including a missing root), and
/// [`crate::error::EngineError::FileRead`] when a supported file cannot be
/// read.
pub fn scan(config: &ScanConfig) -> Result<ScanReport> {
    let mut report = ScanReport::new();

    for entry in build_walker(config).build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        match processor::sloc(path) {
            Ok(sloc) => {
                let rel = relative_path(&config.root, path);
                debug!("{rel}: {sloc}");
                report.push(FileResult::new(rel, sloc));
            }
            Err(e) if e.is_unsupported() => trace!("skip {}", path.display()),
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

fn build_walker(config: &ScanConfig) -> WalkBuilder {
    let mut builder = WalkBuilder::new(&config.root);

    // only the ignore-name list prunes; no gitignore or hidden-file rules
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let config = config.clone();
    builder.filter_entry(move |entry| keep_entry(&config, entry));

    builder
}

fn keep_entry(config: &ScanConfig, entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if config.is_ignored(&name) {
        debug!("ignore {}", entry.path().display());
        return false;
    }
    true
}

/// `path` relative to `root`, joined with `/`.
///
/// A root that is itself a file yields its file name.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    if rel.as_os_str().is_empty() {
        return path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
