use std::path::Path;

use tracing::debug;

use crate::errors::{MaturityError, Result};

/// read an input file, reporting a missing file separately from other io failures
pub(crate) fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MaturityError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| MaturityError::Io {
        path: path.to_path_buf(),
        source,
    })
}
