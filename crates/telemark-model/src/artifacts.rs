//! Artifact roles produced by the external training pipeline.
//!
//! The pipeline itself (data split, imputation, one-hot encoding, randomized
//! hyper-parameter search, final fit) lives outside this repository; the
//! report consumes only its file outputs, each identified here by role.

use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactRole {
    /// Input-feature descriptions: name, type, description.
    Attributes,
    /// Best hyper-parameters selected for the random forest.
    ForestParams,
    /// Best hyper-parameters selected for the logistic regression.
    LogregParams,
    /// Pre-rendered confusion matrix image for the random forest.
    ForestConfusion,
    /// Pre-rendered confusion matrix image for the logistic regression.
    LogregConfusion,
    /// Logistic-regression coefficients: feature, coefficient.
    Coefficients,
}

impl ArtifactRole {
    pub const ALL: [ArtifactRole; 6] = [
        ArtifactRole::Attributes,
        ArtifactRole::ForestParams,
        ArtifactRole::LogregParams,
        ArtifactRole::ForestConfusion,
        ArtifactRole::LogregConfusion,
        ArtifactRole::Coefficients,
    ];

    /// Well-known file name inside the artifact folder.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactRole::Attributes => "attributes.csv",
            ArtifactRole::ForestParams => "rf_params.csv",
            ArtifactRole::LogregParams => "logreg_params.csv",
            ArtifactRole::ForestConfusion => "rf_confusion.png",
            ArtifactRole::LogregConfusion => "logreg_confusion.png",
            ArtifactRole::Coefficients => "coefficients.csv",
        }
    }

    pub fn is_image(self) -> bool {
        matches!(
            self,
            ArtifactRole::ForestConfusion | ArtifactRole::LogregConfusion
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactRole::Attributes => "attributes",
            ArtifactRole::ForestParams => "forest_params",
            ArtifactRole::LogregParams => "logreg_params",
            ArtifactRole::ForestConfusion => "forest_confusion",
            ArtifactRole::LogregConfusion => "logreg_confusion",
            ArtifactRole::Coefficients => "coefficients",
        }
    }
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_unique() {
        let mut names: Vec<&str> = ArtifactRole::ALL.iter().map(|r| r.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ArtifactRole::ALL.len());
    }

    #[test]
    fn images_are_the_confusion_matrices() {
        for role in ArtifactRole::ALL {
            let expected = matches!(
                role,
                ArtifactRole::ForestConfusion | ArtifactRole::LogregConfusion
            );
            assert_eq!(role.is_image(), expected);
        }
    }
}
