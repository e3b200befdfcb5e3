// crates/core/src/report.rs
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

use crate::language::extension_of;

/// Significant-line count of one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    /// Number of significant lines.
    pub sloc: usize,
}

impl FileResult {
    #[must_use]
    pub fn new(path: impl Into<String>, sloc: usize) -> Self {
        Self {
            path: path.into(),
            sloc,
        }
    }

    /// Display width of the path in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.path.chars().count()
    }

    /// Extension of the file name, without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        extension_of(name)
    }
}

/// Result of one directory scan.
///
/// Items keep traversal order. `total` and `max_path_len` are maintained by
/// [`ScanReport::push`], so they always agree with `items`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    items: Vec<FileResult>,
    total: usize,
    max_path_len: usize,
}

impl ScanReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: FileResult) {
        self.total += item.sloc;
        self.max_path_len = self.max_path_len.max(item.width());
        self.items.push(item);
    }

    #[must_use]
    pub fn items(&self) -> &[FileResult] {
        &self.items
    }

    /// Sum of `sloc` over all items.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Widest item path, or 0 when empty.
    #[must_use]
    pub const fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

}

impl Extend<FileResult> for ScanReport {
    fn extend<I: IntoIterator<Item = FileResult>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl FromIterator<FileResult> for ScanReport {
    fn from_iter<I: IntoIterator<Item = FileResult>>(iter: I) -> Self {
        let mut report = Self::new();
        report.extend(iter);
        report
    }
}
