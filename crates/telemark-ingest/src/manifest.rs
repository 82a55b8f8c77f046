//! Artifact manifest.
//!
//! `artifacts.toml` pins the artifact set the report was written against:
//! each pinned file carries its sha256 so that a silently regenerated
//! pipeline output is caught before it ships inside a report. The manifest
//! is optional; without one, discovery alone drives the render.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use telemark_model::ArtifactRole;

use crate::error::{IngestError, Result};
use crate::hash::sha256_file;

pub const MANIFEST_FILE_NAME: &str = "artifacts.toml";
pub const MANIFEST_SCHEMA: &str = "telemark.artifacts-manifest";
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
    #[serde(default)]
    pub pipeline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
    pub role: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Outcome of verifying one folder against its manifest.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub path: PathBuf,
    pub kind: FindingKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    MissingFile,
    Sha256Mismatch { expected: String, actual: String },
    UnknownRole { role: String },
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::MissingFile => write!(f, "pinned file is missing"),
            FindingKind::Sha256Mismatch { expected, actual } => {
                write!(f, "sha256 mismatch (expected {expected}, got {actual})")
            }
            FindingKind::UnknownRole { role } => write!(f, "unknown role {role:?}"),
        }
    }
}

/// Load `artifacts.toml` from the artifact folder.
///
/// Returns `Ok(None)` when no manifest exists. A manifest that exists but
/// does not parse, or carries the wrong schema, is an error: a half-read
/// manifest must not pass for a verified one.
pub fn load_manifest(dir: &Path) -> Result<Option<Manifest>> {
    let path = dir.join(MANIFEST_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| IngestError::io(&path, e))?;
    let manifest: Manifest = toml::from_str(&contents).map_err(|source| IngestError::Manifest {
        path: path.clone(),
        source,
    })?;

    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(IngestError::InvalidManifest {
            path,
            message: format!(
                "unexpected schema {:?} (expected {MANIFEST_SCHEMA:?})",
                manifest.manifest.schema
            ),
        });
    }
    if manifest.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(IngestError::InvalidManifest {
            path,
            message: format!(
                "unsupported schema_version {} (expected {MANIFEST_SCHEMA_VERSION})",
                manifest.manifest.schema_version
            ),
        });
    }
    Ok(Some(manifest))
}

/// Check every pinned file: presence, sha256, and a role this report knows.
///
/// Findings accumulate rather than aborting on the first problem so `check`
/// can print the whole picture in one pass.
pub fn verify_manifest(dir: &Path, manifest: &Manifest) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();
    for file in &manifest.files {
        let path = dir.join(&file.path);
        report.checked += 1;

        if known_role(&file.role).is_none() {
            report.findings.push(Finding {
                path: path.clone(),
                kind: FindingKind::UnknownRole {
                    role: file.role.clone(),
                },
            });
        }

        if !path.is_file() {
            report.findings.push(Finding {
                path,
                kind: FindingKind::MissingFile,
            });
            continue;
        }

        let actual = sha256_file(&path)?;
        if !actual.eq_ignore_ascii_case(file.sha256.trim()) {
            report.findings.push(Finding {
                path,
                kind: FindingKind::Sha256Mismatch {
                    expected: file.sha256.trim().to_string(),
                    actual,
                },
            });
        }
    }
    debug!(
        checked = report.checked,
        findings = report.findings.len(),
        "manifest verified"
    );
    Ok(report)
}

fn known_role(role: &str) -> Option<ArtifactRole> {
    ArtifactRole::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == role)
}
