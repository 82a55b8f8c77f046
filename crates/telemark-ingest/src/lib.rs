pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod hash;
pub mod manifest;

pub use csv_table::{read_artifact_table, read_coefficients};
pub use discovery::{ArtifactSet, discover_artifacts, list_unclaimed_files};
pub use error::{IngestError, Result};
pub use hash::sha256_hex;
pub use manifest::{
    Finding, FindingKind, MANIFEST_FILE_NAME, Manifest, ManifestFile, ManifestHeader,
    VerifyReport, load_manifest, verify_manifest,
};
