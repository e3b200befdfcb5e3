// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::presentation::Style;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan according to `args` and print the report to stdout.
///
/// # Errors
///
/// Fails on invalid configuration, any traversal or read error, and output
/// failures.
pub fn run(args: &Args) -> Result<()> {
    let config = ScanConfig::try_from(args)?;
    let report = sloc_engine::run(&config)?;

    let mut stdout = std::io::stdout().lock();
    presentation::print_report(
        &mut stdout,
        &report,
        args.output_format(),
        Style::resolve(args.color),
    )?;
    stdout.flush()?;
    Ok(())
}
