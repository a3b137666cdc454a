//! Atomic output writes.
//!
//! Output is staged in a temporary file next to the destination and renamed
//! into place only after every byte has been written and flushed, so a
//! failed run never leaves a truncated output behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{EngineError, EngineResult};

fn staging_directory(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Writes `payload` to `destination`, replacing any existing file.
pub fn write_atomically(destination: &Path, payload: &[u8]) -> EngineResult<()> {
    let directory = staging_directory(destination);
    let mut staged = NamedTempFile::new_in(directory)
        .map_err(|error| EngineError::io("create temporary file in", directory, error))?;

    logging::trace_io!(
        "staging {} bytes for {} in {}",
        payload.len(),
        destination.display(),
        staged.path().display()
    );

    staged
        .write_all(payload)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|error| EngineError::io("write", staged.path(), error))?;

    staged
        .persist(destination)
        .map_err(|error| EngineError::io("rename output into", destination, error.error))?;

    logging::trace_io!("committed {}", destination.display());
    Ok(())
}
