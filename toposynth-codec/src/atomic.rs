//! All-or-nothing file replacement.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::CodecError;

/// Writes `contents` to `path` through a sibling temporary file.
///
/// The temporary file lives in the destination directory so the final rename
/// never crosses a filesystem. It is removed on every error path, leaving any
/// existing destination untouched.
#[instrument(
    name = "codec.write_atomically",
    err,
    skip(path, contents),
    fields(path = %path.display(), bytes = contents.len()),
)]
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), CodecError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(directory).map_err(CodecError::io(path))?;
    staged
        .write_all(contents.as_bytes())
        .map_err(CodecError::io(path))?;
    staged.as_file().sync_all().map_err(CodecError::io(path))?;
    staged
        .persist(path)
        .map_err(|err| CodecError::io(path)(err.error))?;
    debug!("file persisted");
    Ok(())
}
