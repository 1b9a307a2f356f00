//! File helpers shared by the adapters

use std::io;
use std::path::Path;

use vss_domain::error::{Error, Result};

/// Fail with `NotFound` unless `path` is an existing regular file
///
/// Other metadata failures (permissions, a file used as a directory) are
/// reported as `Io`.
pub async fn ensure_file(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(Error::not_found(path.display().to_string())),
        Err(e) => Err(metadata_error(path, e)),
    }
}

/// Fail with `NotFound` unless `path` is an existing directory
pub async fn ensure_dir(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::not_found(path.display().to_string())),
        Err(e) => Err(metadata_error(path, e)),
    }
}

fn metadata_error(path: &Path, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::not_found(path.display().to_string())
    } else {
        Error::io_with_source(format!("Cannot access {}", path.display()), err)
    }
}

/// File name component as an owned string (lossy for non-UTF-8 names)
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
