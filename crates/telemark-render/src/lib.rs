//! Report assembly.
//!
//! This crate turns a report definition plus a discovered artifact set into
//! a rendered HTML document on disk:
//!
//! - **Tables**: CSV artifacts rendered verbatim, rows and columns in file
//!   order
//! - **Figures**: pre-rendered images copied into `assets/` and referenced
//! - **Charts**: coefficient bar charts generated as SVG
//! - **Summary**: machine-readable `render_summary.json` next to the report

mod assets;
mod common;
mod html;
mod summary;

pub use assets::copy_asset;
pub use html::render_report;
pub use summary::{BlockOutcome, RenderSummary, write_render_summary};
