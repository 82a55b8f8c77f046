#![deny(unsafe_code)]

use std::path::Path;

use sha2::Digest;

use crate::error::{IngestError, Result};

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

/// Digest of a file's contents, as lowercase hex.
pub fn sha256_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    Ok(sha256_hex(&bytes))
}
