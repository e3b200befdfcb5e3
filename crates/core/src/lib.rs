#![no_std]
#![allow(clippy::cargo_common_metadata)]

extern crate alloc;

pub mod classifier;
pub mod language;
pub mod report;

pub use classifier::{count_bytes, count_significant_lines};
pub use language::LanguageSpec;
pub use report::{FileResult, ScanReport};
