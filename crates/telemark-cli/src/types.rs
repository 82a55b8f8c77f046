use std::path::PathBuf;

use telemark_render::RenderSummary;

#[derive(Debug)]
pub struct RenderResult {
    pub output_dir: PathBuf,
    pub summary: RenderSummary,
}
