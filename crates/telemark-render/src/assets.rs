//! Asset copying.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Copy a source file into the assets directory, keeping its file name.
///
/// Returns the file name for use in a relative `src` attribute.
pub fn copy_asset(source: &Path, assets_dir: &Path) -> Result<String> {
    let name = source
        .file_name()
        .and_then(|v| v.to_str())
        .ok_or_else(|| anyhow!("asset has no usable file name: {}", source.display()))?;
    let target = assets_dir.join(name);
    std::fs::copy(source, &target).with_context(|| {
        format!(
            "copy {} to {}",
            source.display(),
            target.display()
        )
    })?;
    debug!(asset = name, "asset copied");
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn copies_preserving_name() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("rf_confusion.png");
        std::fs::write(&source, b"png-bytes").unwrap();
        let assets = dir.path().join("assets");
        std::fs::create_dir_all(&assets).unwrap();

        let name = copy_asset(&source, &assets).unwrap();
        assert_eq!(name, "rf_confusion.png");
        assert_eq!(std::fs::read(assets.join(name)).unwrap(), b"png-bytes");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        std::fs::create_dir_all(&assets).unwrap();
        let result = copy_asset(&dir.path().join("gone.png"), &assets);
        assert!(result.is_err());
    }
}
