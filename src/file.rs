// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{ExportError, ExportResult};

/// Write `contents` to `path`, creating parent directories and replacing any
/// existing file. Returns the path written to.
pub fn write_export(path: &Path, contents: &str) -> ExportResult<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    Ok(path.to_path_buf())
}

/// A user path that names a directory (trailing separator, or an existing
/// directory) gets `default_filename` appended.
pub fn resolve_out_path(user_path: &Path, default_filename: &str) -> PathBuf {
    if user_path.as_os_str().is_empty() {
        return PathBuf::from(default_filename);
    }
    if looks_like_dir_hint(user_path) || user_path.is_dir() {
        user_path.join(default_filename)
    } else {
        user_path.to_path_buf()
    }
}

pub fn ensure_directory(dir: &Path) -> ExportResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
