// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;

pub use config::{DEFAULT_IGNORE, ScanConfig, ScanConfigBuilder};
pub use error::{EngineError, Result};
pub use processor::sloc;
pub use sloc_core::report::{FileResult, ScanReport};

/// Run a scan.
///
/// Returns the per-file significant-line counts in traversal order together
/// with the grand total.
///
/// # Errors
///
/// Fails on the first traversal or read error; no partial report is
/// returned. Unsupported files never cause an error.
pub fn run(config: &ScanConfig) -> Result<ScanReport> {
    log::info!("scanning {}", config.root.display());

    let report = filesystem::scan(config)?;

    log::info!(
        "{} files, {} significant lines",
        report.len(),
        report.total()
    );
    Ok(report)
}
