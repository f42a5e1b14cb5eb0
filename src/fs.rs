//! Change detection and file writing
//!
//! The pipeline's file-system discipline lives here: never write unless
//! bytes differ, always clear a read-only attribute before writing, and
//! make every write a discrete, complete operation (tempfile + rename in
//! the target directory, so no partial file state is observable).

use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;

/// Decide whether a candidate buffer differs from what is on disk.
///
/// An absent target always counts as changed; otherwise any byte
/// difference, including a length difference, is "changed".
pub fn has_changed(path: &Path, candidate: &[u8]) -> io::Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let existing = std::fs::read(path)?;
    Ok(existing != candidate)
}

/// Write bytes only when they differ from the target's current content.
///
/// Returns whether a write actually occurred.
pub fn write_if_changed(path: &Path, bytes: &[u8]) -> Result<bool> {
    if !has_changed(path, bytes)? {
        return Ok(false);
    }
    write_file(path, bytes)?;
    Ok(true)
}

/// Unconditionally replace the target's content.
///
/// Clears a read-only attribute if present (a write must never fail solely
/// because a previous build left the file locked), creates parent
/// directories, then writes atomically. The attribute is not restored.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    clear_readonly(path)?;
    atomic_write(path, bytes)?;
    Ok(())
}

/// Clear a read-only attribute on an existing file. Missing files are fine.
fn clear_readonly(path: &Path) -> io::Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) => {
            let mut perms = meta.permissions();
            if perms.readonly() {
                perms.set_readonly(false);
                std::fs::set_permissions(path, perms)?;
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Write content atomically via tempfile + rename in the target directory
fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
