pub mod artifacts;
pub mod coefficients;
pub mod content;
pub mod options;
pub mod scores;
pub mod table;

pub use artifacts::ArtifactRole;
pub use coefficients::CoefficientRow;
pub use content::{Block, ChartEnd, ReportDefinition, bank_marketing_report};
pub use options::{ChartSlices, RenderOptions};
pub use scores::{ClassScores, ModelScores};
pub use table::ArtifactTable;
