//! Serialization of an ordered chain back to bundle text
//!
//! Lines are emitted verbatim, preamble first then body per record. File
//! writes go through a temporary file in the destination directory that is
//! persisted over the target, so a failed run never leaves a partially
//! written bundle behind.

use crate::chain::record::CertificateRecord;
use crate::error::{ChainError, Result};
use std::io::Write;
use std::path::Path;

/// Flatten the ordered records into output lines, verbatim.
pub fn flatten_chain(records: &[CertificateRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.lines().map(String::from))
        .collect()
}

/// Write the ordered chain to `path`, all or nothing.
pub fn write_chain(path: &Path, records: &[CertificateRecord]) -> Result<()> {
    let mut content = String::new();
    for record in records {
        for line in record.lines() {
            content.push_str(line);
            content.push('\n');
        }
    }

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .map_err(|e| output_error(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| output_error(path, e))?;
    tmp.persist(path)
        .map_err(|e| output_error(path, e.error))?;

    tracing::debug!(path = %path.display(), lines = content.lines().count(), "wrote chain");
    Ok(())
}

fn output_error(path: &Path, e: std::io::Error) -> ChainError {
    ChainError::OutputUnavailable {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
