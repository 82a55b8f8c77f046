//! Hand-entered evaluation scores.
//!
//! These values were transcribed from the pipeline's held-out evaluation and
//! are constants of the report definition, not computed at render time.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelScores {
    pub model: String,
    pub accuracy: f64,
    pub classes: Vec<ClassScores>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClassScores {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ModelScores {
    pub fn new(model: impl Into<String>, accuracy: f64, classes: Vec<ClassScores>) -> Self {
        Self {
            model: model.into(),
            accuracy,
            classes,
        }
    }
}

impl ClassScores {
    pub fn new(label: impl Into<String>, precision: f64, recall: f64, f1: f64) -> Self {
        Self {
            label: label.into(),
            precision,
            recall,
            f1,
        }
    }
}
