//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};

/// Write `contents` to `path` atomically
///
/// The data goes to a temp file in the destination directory first and is then
/// renamed over the target, so readers never observe a half-written file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(path, e))?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| fs_error::write_failed(path, e))?;
    temp.write_all(contents)
        .and_then(|()| temp.flush())
        .map_err(|e| fs_error::write_failed(path, e))?;
    if let Some(permissions) = target_permissions(path) {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| fs_error::write_failed(path, e))?;
    }
    temp.persist(path)
        .map_err(|e| fs_error::write_failed(path, e.error))?;

    Ok(())
}

/// Mode for the replacement file: the existing target's, or `0644` when new
///
/// Temp files are created `0600`, which would otherwise survive the rename.
#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path).map_or(0o644, |meta| meta.permissions().mode() & 0o7777);
    Some(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    fs::metadata(path).ok().map(|meta| meta.permissions())
}

/// Read a file to string, `None` when it does not exist
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(fs_error::read_failed(path, e)),
    }
}
