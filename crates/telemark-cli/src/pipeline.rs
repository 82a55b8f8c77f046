//! Render pipeline with explicit stages.
//!
//! 1. **Discover**: resolve artifact roles against the folder
//! 2. **Verify**: check the manifest, when one is present
//! 3. **Render**: assemble the report and its assets
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; the first failure aborts the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{info, info_span, warn};

use telemark_ingest::{
    ArtifactSet, VerifyReport, discover_artifacts, list_unclaimed_files, load_manifest,
    verify_manifest,
};
use telemark_model::{RenderOptions, ReportDefinition};
use telemark_render::{RenderSummary, render_report};

/// Result of the discover and verify stages, as run by `check`.
#[derive(Debug)]
pub struct CheckOutcome {
    pub artifacts: ArtifactSet,
    /// `None` when the folder carries no manifest.
    pub manifest: Option<VerifyReport>,
    /// Files claimed by no artifact role.
    pub unclaimed: Vec<PathBuf>,
}

impl CheckOutcome {
    /// A folder passes when every role resolves and the manifest, if any,
    /// verifies clean. Unclaimed files are worth a look but not a failure.
    pub fn is_clean(&self) -> bool {
        self.artifacts.is_complete()
            && self.manifest.as_ref().is_none_or(VerifyReport::is_clean)
    }
}

/// Discover artifacts and verify the manifest without rendering anything.
pub fn check_artifacts(dir: &Path) -> Result<CheckOutcome> {
    let artifacts = discover_artifacts(dir)?;
    let manifest = match load_manifest(dir)? {
        Some(manifest) => Some(verify_manifest(dir, &manifest)?),
        None => None,
    };
    let unclaimed = list_unclaimed_files(dir)?;
    Ok(CheckOutcome {
        artifacts,
        manifest,
        unclaimed,
    })
}

/// Run the full pipeline: discover, verify, render.
///
/// A present-but-failing manifest aborts before anything is written; the
/// report must not be assembled from artifacts the manifest disowns.
pub fn run_pipeline(
    artifact_dir: &Path,
    report: &ReportDefinition,
    options: &RenderOptions,
    skip_manifest: bool,
) -> Result<RenderSummary> {
    let span = info_span!("pipeline", artifact_dir = %artifact_dir.display());
    let _guard = span.enter();

    let discover_start = Instant::now();
    let artifacts = discover_artifacts(artifact_dir)?;
    info!(
        missing = artifacts.missing().len(),
        duration_ms = discover_start.elapsed().as_millis(),
        "discovery complete"
    );

    if skip_manifest {
        info!("manifest verification skipped");
    } else if let Some(manifest) = load_manifest(artifact_dir)? {
        let verified = verify_manifest(artifact_dir, &manifest)?;
        if !verified.is_clean() {
            for finding in &verified.findings {
                warn!(path = %finding.path.display(), "{}", finding.kind);
            }
            bail!(
                "manifest verification failed: {} finding(s) across {} pinned file(s)",
                verified.findings.len(),
                verified.checked
            );
        }
        info!(checked = verified.checked, "manifest clean");
    }

    let render_start = Instant::now();
    let summary = render_report(&artifacts, report, options)?;
    info!(
        blocks = summary.blocks.len(),
        duration_ms = render_start.elapsed().as_millis(),
        "render complete"
    );
    Ok(summary)
}
