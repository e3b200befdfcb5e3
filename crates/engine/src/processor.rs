use crate::error::{EngineError, Result};
use sloc_core::classifier::count_bytes;
use sloc_core::language::{LanguageSpec, extension_of};
use std::path::Path;

/// 拡張子から言語を判定する
#[must_use]
pub fn language_for(path: &Path) -> Option<&'static LanguageSpec> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(extension_of)
        .and_then(LanguageSpec::from_extension)
}

/// Count the significant lines of a single file.
///
/// # Errors
///
/// [`EngineError::UnsupportedFileType`] when the extension is not in the
/// language table (checked before touching the filesystem), and
/// [`EngineError::FileRead`] when the file cannot be read.
pub fn sloc(path: &Path) -> Result<usize> {
    let spec = language_for(path).ok_or_else(|| EngineError::UnsupportedFileType {
        path: path.to_path_buf(),
    })?;
    count_file(path, spec)
}

/// Read `path` fully and classify it with `spec`.
///
/// # Errors
///
/// [`EngineError::FileRead`] on any I/O failure.
pub fn count_file(path: &Path, spec: &LanguageSpec) -> Result<usize> {
    let bytes = std::fs::read(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count_bytes(&bytes, spec))
}
