//! Read-side I/O helpers

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content if the file exists and is readable.
///
/// Missing files yield `None`. A file that exists but cannot be read also
/// yields `None` and is logged as a warning.
pub fn read_optional(path: &NormalizedPath) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match read_text(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!(%path, error = %e, "Skipping unreadable file");
            None
        }
    }
}
