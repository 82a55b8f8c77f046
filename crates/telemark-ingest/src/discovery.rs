//! Artifact discovery.
//!
//! Pipeline outputs land in one folder under well-known names; discovery
//! resolves each role against that folder and records what is absent.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use telemark_model::ArtifactRole;

use crate::error::{IngestError, Result};
use crate::manifest::MANIFEST_FILE_NAME;

/// Resolved artifact paths for one folder.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    dir: PathBuf,
    present: BTreeMap<ArtifactRole, PathBuf>,
    missing: Vec<ArtifactRole>,
}

impl ArtifactSet {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a discovered artifact, `None` when the file was absent.
    pub fn path(&self, role: ArtifactRole) -> Option<&Path> {
        self.present.get(&role).map(PathBuf::as_path)
    }

    /// Path of an artifact that must exist for rendering to proceed.
    pub fn require(&self, role: ArtifactRole) -> Result<&Path> {
        self.path(role).ok_or_else(|| IngestError::MissingArtifact {
            role,
            path: self.dir.join(role.file_name()),
        })
    }

    /// Roles with no file in the folder, in declaration order.
    pub fn missing(&self) -> &[ArtifactRole] {
        &self.missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Resolve every artifact role against `dir`.
///
/// Absent files are recorded, not errors: `check` reports them all at once,
/// and `render` fails later on the first role it actually needs.
pub fn discover_artifacts(dir: &Path) -> Result<ArtifactSet> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut present = BTreeMap::new();
    let mut missing = Vec::new();
    for role in ArtifactRole::ALL {
        let path = dir.join(role.file_name());
        if path.is_file() {
            debug!(role = %role, path = %path.display(), "artifact resolved");
            present.insert(role, path);
        } else {
            missing.push(role);
        }
    }

    Ok(ArtifactSet {
        dir: dir.to_path_buf(),
        present,
        missing,
    })
}

/// Files in the artifact folder claimed by no role and not the manifest.
///
/// Returned sorted by file name. Stray files are worth a warning during
/// `check`: they usually mean the pipeline and the report disagree on names.
pub fn list_unclaimed_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let known: Vec<&str> = ArtifactRole::ALL
        .iter()
        .map(|role| role.file_name())
        .chain(std::iter::once(MANIFEST_FILE_NAME))
        .collect();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut unclaimed = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|v| v.to_str())
            .unwrap_or_default();
        if !known.contains(&name) {
            unclaimed.push(path);
        }
    }
    unclaimed.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(unclaimed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn artifact_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        dir
    }

    #[test]
    fn complete_folder_has_no_missing_roles() {
        let names: Vec<&str> = ArtifactRole::ALL.iter().map(|r| r.file_name()).collect();
        let dir = artifact_dir(&names);
        let set = discover_artifacts(dir.path()).unwrap();
        assert!(set.is_complete());
        for role in ArtifactRole::ALL {
            assert!(set.path(role).is_some());
        }
    }

    #[test]
    fn absent_files_are_recorded_not_fatal() {
        let dir = artifact_dir(&["attributes.csv", "coefficients.csv"]);
        let set = discover_artifacts(dir.path()).unwrap();
        assert!(!set.is_complete());
        assert_eq!(set.missing().len(), 4);
        assert!(set.path(ArtifactRole::Attributes).is_some());
        assert!(set.path(ArtifactRole::ForestConfusion).is_none());
    }

    #[test]
    fn require_names_the_expected_path() {
        let dir = artifact_dir(&[]);
        let set = discover_artifacts(dir.path()).unwrap();
        let error = set.require(ArtifactRole::Coefficients).unwrap_err();
        match error {
            IngestError::MissingArtifact { role, path } => {
                assert_eq!(role, ArtifactRole::Coefficients);
                assert!(path.ends_with("coefficients.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = TempDir::new().unwrap();
        let bogus = dir.path().join("nope");
        assert!(matches!(
            discover_artifacts(&bogus),
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn unclaimed_files_are_listed_sorted() {
        let dir = artifact_dir(&["attributes.csv", "zzz.csv", "artifacts.toml", "aaa.txt"]);
        let unclaimed = list_unclaimed_files(dir.path()).unwrap();
        let names: Vec<_> = unclaimed
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["aaa.txt", "zzz.csv"]);
    }
}
