//! Create-once file writing

use crate::error::{Result, ScaffoldError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Write `content` to a new file at `path`, creating missing parent directories.
///
/// Fails with [`ScaffoldError::FileExists`] if anything already exists at `path`,
/// or if a non-directory sits where the parent directory should be; the
/// existing entry is left untouched. Parent directories are created before
/// the collision check and are not removed on failure.
pub fn write_new_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::FileExists {
                path: parent.to_path_buf(),
            },
            _ => ScaffoldError::Io {
                path: parent.to_path_buf(),
                source,
            },
        })?;
    }

    // create_new makes the existence check and the create a single operation
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::FileExists {
                path: path.to_path_buf(),
            },
            _ => ScaffoldError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

    file.write_all(content.as_bytes())
        .map_err(|source| ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        })
}
