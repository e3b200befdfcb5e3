use crate::error::EngineError;
use derive_builder::Builder;
use hashbrown::HashSet;
use std::path::PathBuf;

/// Base names pruned from every scan.
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", "coverage", ".git", ".next"];

/// Configuration of one scan.
///
/// ```
/// use sloc_engine::config::ScanConfigBuilder;
///
/// let config = ScanConfigBuilder::default()
///     .root("src")
///     .extra_ignore(["vendor", "dist"])
///     .build()
///     .unwrap();
/// assert!(config.is_ignored("vendor"));
/// assert!(config.is_ignored(".git"));
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    /// Directory (or single file) to scan.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// Base names to skip; directories with these names are not descended.
    #[builder(default = "default_ignore()", setter(custom))]
    pub ignore: HashSet<String>,
}

impl ScanConfig {
    /// Scan `root` with the built-in ignore list.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore: default_ignore(),
        }
    }

    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }
}

impl ScanConfigBuilder {
    /// Add names on top of the built-in ignore list.
    ///
    /// Names are trimmed; empty names are dropped.
    pub fn extra_ignore<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.ignore.get_or_insert_with(default_ignore);
        set.extend(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_owned())
                .filter(|name| !name.is_empty()),
        );
        self
    }

    /// Replace the ignore list entirely, dropping the built-in names.
    pub fn ignore_exactly<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

impl From<ScanConfigBuilderError> for EngineError {
    fn from(err: ScanConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

fn default_ignore() -> HashSet<String> {
    DEFAULT_IGNORE.iter().map(|&name| name.to_owned()).collect()
}
