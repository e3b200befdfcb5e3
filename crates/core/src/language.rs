// crates/core/src/language.rs
//! 拡張子ごとのコメント構文テーブル
//!
//! | Extension | Inline | Block |
//! |-----------|--------|-------|
//! | `c` `h` `go` `js` `jsx` `ts` `tsx` `scss` | `//` | `/*` `*/` |
//! | `css` | - | `/*` `*/` |
//! | `html` | - | `<!--` `-->` |
//! | `lua` | `--` | `--[[` `]]` |
//! | `py` | `#` | `"""` `"""` |
//! | `scm` | `;` | - |
//! | `sh` `zsh` | `#` | - |
//! | `tex` | `%` | - |
//! | `vim` | `"` | - |

/// Comment syntax of a single language.
///
/// An empty string means the language has no such construct. Block comments
/// are only recognised when both delimiters are non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    /// Display name.
    pub name: &'static str,
    /// Line comment prefix.
    pub inline: &'static str,
    /// Block comment opening delimiter.
    pub block_start: &'static str,
    /// Block comment closing delimiter.
    pub block_end: &'static str,
}

impl LanguageSpec {
    const fn new(
        name: &'static str,
        inline: &'static str,
        block_start: &'static str,
        block_end: &'static str,
    ) -> Self {
        Self {
            name,
            inline,
            block_start,
            block_end,
        }
    }

    #[must_use]
    pub const fn has_inline_comments(&self) -> bool {
        !self.inline.is_empty()
    }

    #[must_use]
    pub const fn has_block_comments(&self) -> bool {
        !self.block_start.is_empty() && !self.block_end.is_empty()
    }

    /// 拡張子 (先頭の `.` なし) から言語を引く
    ///
    /// Matching is exact and case-sensitive; `None` means the file type is
    /// not supported.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<&'static Self> {
        let spec = match ext {
            "c" => &C,
            "css" => &CSS,
            "go" => &GO,
            "h" => &C_HEADER,
            "html" => &HTML,
            "js" => &JAVASCRIPT,
            "jsx" => &JSX,
            "lua" => &LUA,
            "py" => &PYTHON,
            "scm" => &SCHEME,
            "scss" => &SCSS,
            "sh" => &SHELL,
            "tex" => &TEX,
            "ts" => &TYPESCRIPT,
            "tsx" => &TSX,
            "vim" => &VIM,
            "zsh" => &ZSH,
            _ => return None,
        };
        Some(spec)
    }
}

/// Text after the last `.` of a file name.
///
/// A leading dot counts, so `.sh` has the extension `sh` and `.zshrc` has
/// `zshrc`. Names without a dot have none.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|dot| &file_name[dot + 1..])
}

/// Every extension accepted by [`LanguageSpec::from_extension`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "c", "css", "go", "h", "html", "js", "jsx", "lua", "py", "scm", "scss", "sh", "tex", "ts",
    "tsx", "vim", "zsh",
];

static C: LanguageSpec = LanguageSpec::new("C", "//", "/*", "*/");
static C_HEADER: LanguageSpec = LanguageSpec::new("C Header", "//", "/*", "*/");
static CSS: LanguageSpec = LanguageSpec::new("CSS", "", "/*", "*/");
static GO: LanguageSpec = LanguageSpec::new("Go", "//", "/*", "*/");
static HTML: LanguageSpec = LanguageSpec::new("HTML", "", "<!--", "-->");
static JAVASCRIPT: LanguageSpec = LanguageSpec::new("JavaScript", "//", "/*", "*/");
// TODO: JSX text children that begin with `//` are dropped as line comments.
static JSX: LanguageSpec = LanguageSpec::new("JSX", "//", "/*", "*/");
static LUA: LanguageSpec = LanguageSpec::new("Lua", "--", "--[[", "]]");
static PYTHON: LanguageSpec = LanguageSpec::new("Python", "#", "\"\"\"", "\"\"\"");
static SCHEME: LanguageSpec = LanguageSpec::new("Scheme", ";", "", "");
static SCSS: LanguageSpec = LanguageSpec::new("SCSS", "//", "/*", "*/");
static SHELL: LanguageSpec = LanguageSpec::new("Shell", "#", "", "");
static TEX: LanguageSpec = LanguageSpec::new("TeX", "%", "", "");
static TYPESCRIPT: LanguageSpec = LanguageSpec::new("TypeScript", "//", "/*", "*/");
static TSX: LanguageSpec = LanguageSpec::new("TSX", "//", "/*", "*/");
static VIM: LanguageSpec = LanguageSpec::new("Vim script", "\"", "", "");
static ZSH: LanguageSpec = LanguageSpec::new("Zsh", "#", "", "");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_extension_resolves() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(LanguageSpec::from_extension(ext).is_some(), "{ext}");
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.go"), Some("go"));
        assert_eq!(extension_of("a.tar.py"), Some("py"));
        assert_eq!(extension_of(".sh"), Some("sh"));
        assert_eq!(extension_of(".zshrc"), Some("zshrc"));
        assert_eq!(extension_of("trailing."), Some(""));
        assert_eq!(extension_of("Makefile"), None);
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(LanguageSpec::from_extension("pdf"), None);
        assert_eq!(LanguageSpec::from_extension(""), None);
        assert_eq!(LanguageSpec::from_extension(".go"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(LanguageSpec::from_extension("GO").is_none());
        assert!(LanguageSpec::from_extension("Py").is_none());
    }

    #[test]
    fn test_comment_support_flags() {
        let css = LanguageSpec::from_extension("css").unwrap();
        assert!(!css.has_inline_comments());
        assert!(css.has_block_comments());

        let sh = LanguageSpec::from_extension("sh").unwrap();
        assert!(sh.has_inline_comments());
        assert!(!sh.has_block_comments());

        let lua = LanguageSpec::from_extension("lua").unwrap();
        assert_eq!(lua.block_start, "--[[");
        assert_eq!(lua.block_end, "]]");
    }
}
