use std::path::PathBuf;

/// Row counts for the two coefficient charts, taken from the head and tail of
/// the descending-sorted coefficient table.
///
/// The sizes are explicit so that a report definition choosing unequal values
/// does so visibly; the default is symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChartSlices {
    pub top: usize,
    pub bottom: usize,
}

impl Default for ChartSlices {
    fn default() -> Self {
        Self { top: 10, bottom: 10 }
    }
}

/// Options controlling a single report render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory the report and its assets are written to.
    pub output_dir: PathBuf,
    /// Chart slice sizes; `None` uses the report definition's sizes.
    pub slices: Option<ChartSlices>,
    /// Inline generated charts into the document instead of writing separate
    /// SVG files under `assets/`.
    pub self_contained: bool,
}

impl RenderOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            slices: None,
            self_contained: false,
        }
    }

    #[must_use]
    pub fn with_slices(mut self, slices: ChartSlices) -> Self {
        self.slices = Some(slices);
        self
    }

    #[must_use]
    pub fn with_self_contained(mut self, enable: bool) -> Self {
        self.self_contained = enable;
        self
    }
}
