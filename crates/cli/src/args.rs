// crates/cli/src/args.rs
use crate::options::{ColorChoice, OutputFormat};
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "sloc",
    version = crate::VERSION,
    about = "Count significant lines of code per file",
    long_about = "Count significant lines of code per file.\n\n\
        Blank lines, block comments and lines that only hold a line comment \
        are not counted. `node_modules`, `coverage`, `.git` and `.next` are \
        always skipped unless --no-default-ignore is given."
)]
pub struct Args {
    /// Directory to scan
    #[arg(default_value = ".", value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,

    /// Additional entries to ignore (comma separated, exact base names)
    #[arg(short, long, value_delimiter = ',', help_heading = "Scan")]
    pub ignore: Vec<String>,

    /// Do not skip the built-in ignore list
    #[arg(long, help_heading = "Scan")]
    pub no_default_ignore: bool,

    /// Print only the grand total (same as --format brief)
    #[arg(short, long, conflicts_with = "format", help_heading = "Output")]
    pub brief: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, help_heading = "Output")]
    pub format: OutputFormat,

    /// When to color the table
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help_heading = "Output")]
    pub color: ColorChoice,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// `--brief` wins over `--format`.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.brief {
            OutputFormat::Brief
        } else {
            self.format
        }
    }
}
