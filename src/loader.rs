use crate::error::{FreqError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Read the whole corpus file as text.
///
/// Invalid UTF-8 sequences are dropped rather than rejected, so decoding never
/// fails. A missing file is reported as [`FreqError::CorpusNotFound`].
pub fn read_corpus(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FreqError::CorpusNotFound {
            path: path.to_path_buf(),
        },
        _ => FreqError::io(path, e),
    })?;
    let text = decode_dropping_invalid(&bytes);

    let dropped = bytes.len() - text.len();
    if dropped > 0 {
        tracing::warn!(
            "Dropped {} undecodable byte(s) from {}",
            dropped,
            path.display()
        );
    }
    tracing::info!("Loaded corpus {} ({} bytes)", path.display(), text.len());

    Ok(text)
}

/// Decode UTF-8, silently skipping malformed byte sequences.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
