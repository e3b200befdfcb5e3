// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::{ColorChoice, OutputFormat};
use sloc_core::language::LanguageSpec;
use sloc_core::report::{FileResult, ScanReport};
use std::io::{self, IsTerminal, Write};

const GRAY: &str = "\x1b[38;5;8m";
const RESET: &str = "\x1b[0m";
const ICON: char = '●';
const TOTAL_LABEL: &str = "Total";

/// Whether ANSI colors are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    #[must_use]
    pub fn resolve(choice: ColorChoice) -> Self {
        let color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        Self { color }
    }

    fn gray(self, s: &str) -> String {
        if self.color {
            format!("{GRAY}{s}{RESET}")
        } else {
            s.to_owned()
        }
    }

    fn icon(self, item: &FileResult) -> String {
        if !self.color {
            return ICON.to_string();
        }
        let code = item
            .extension()
            .and_then(LanguageSpec::from_extension)
            .map_or(7, icon_color);
        format!("\x1b[38;5;{code}m{ICON}{RESET}")
    }
}

/// ANSI 256-color code of a language icon.
fn icon_color(spec: &LanguageSpec) -> u8 {
    match spec.name {
        "C" | "C Header" => 75,
        "CSS" => 135,
        "Go" => 81,
        "HTML" => 202,
        "JavaScript" | "JSX" => 221,
        "Lua" => 27,
        "Python" => 220,
        "Scheme" => 160,
        "SCSS" => 169,
        "Shell" | "Zsh" => 113,
        "TeX" => 70,
        "TypeScript" | "TSX" => 33,
        "Vim script" => 34,
        _ => 7,
    }
}

/// Render `report` to `out`.
///
/// Table and brief output stay silent when nothing was counted; JSON always
/// prints the report.
///
/// # Errors
///
/// Propagates write and serialization failures.
pub fn print_report<W: Write>(
    out: &mut W,
    report: &ScanReport,
    format: OutputFormat,
    style: Style,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        _ if report.total() == 0 => {}
        OutputFormat::Brief => writeln!(out, "{}", report.total())?,
        OutputFormat::Table => write_table(out, report, style)?,
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, report: &ScanReport, style: Style) -> io::Result<()> {
    let layout = Layout {
        path_width: report.max_path_len().max(TOTAL_LABEL.len()),
        sloc_width: report.total().to_string().len(),
        style,
    };

    writeln!(out, "{}", layout.rule('┌', '┬', '┐'))?;
    for item in report.items() {
        writeln!(out, "{}", layout.row(&style.icon(item), &item.path, item.sloc))?;
    }
    writeln!(out, "{}", layout.rule('├', '┼', '┤'))?;
    writeln!(out, "{}", layout.row(" ", TOTAL_LABEL, report.total()))?;
    writeln!(out, "{}", layout.rule('└', '┴', '┘'))?;
    Ok(())
}

/// Column widths of the table.
///
/// The path column also holds the icon and its trailing space.
struct Layout {
    path_width: usize,
    sloc_width: usize,
    style: Style,
}

impl Layout {
    fn rule(&self, left: char, mid: char, right: char) -> String {
        let path = "─".repeat(self.path_width + 4);
        let sloc = "─".repeat(self.sloc_width + 2);
        self.style.gray(&format!("{left}{path}{mid}{sloc}{right}"))
    }

    fn row(&self, icon: &str, path: &str, sloc: usize) -> String {
        let bar = self.style.gray("│");
        format!(
            "{bar} {icon} {path:<pw$} {bar} {sloc:>sw$} {bar}",
            pw = self.path_width,
            sw = self.sloc_width
        )
    }
}
