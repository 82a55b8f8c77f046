//! Machine-readable render summary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const SUMMARY_FILE_NAME: &str = "render_summary.json";
const SUMMARY_SCHEMA: &str = "telemark.render-summary";
const SUMMARY_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderSummary {
    pub schema: &'static str,
    pub schema_version: u32,
    pub title: String,
    pub generated_at: String,
    pub report_path: PathBuf,
    pub blocks: Vec<BlockOutcome>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct BlockOutcome {
    pub kind: &'static str,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

impl RenderSummary {
    pub fn new(title: impl Into<String>, generated_at: String, report_path: PathBuf) -> Self {
        Self {
            schema: SUMMARY_SCHEMA,
            schema_version: SUMMARY_SCHEMA_VERSION,
            title: title.into(),
            generated_at,
            report_path,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: BlockOutcome) {
        self.blocks.push(outcome);
    }
}

impl BlockOutcome {
    pub fn new(kind: &'static str, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            source: None,
            rows: None,
            asset: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: &Path) -> Self {
        self.source = Some(source.to_path_buf());
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }
}

/// Write the summary as pretty JSON into the output directory.
pub fn write_render_summary(output_dir: &Path, summary: &RenderSummary) -> Result<PathBuf> {
    let path = output_dir.join(SUMMARY_FILE_NAME);
    let json = serde_json::to_string_pretty(summary).context("serialize render summary")?;
    std::fs::write(&path, format!("{json}\n"))
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
