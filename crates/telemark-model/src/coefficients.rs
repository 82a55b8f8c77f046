/// One logistic-regression coefficient as produced by the pipeline: one row
/// per numeric feature or one-hot-encoded category. Uniqueness of feature
/// names is whatever the upstream pipeline wrote; none is enforced here.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoefficientRow {
    pub feature: String,
    pub value: f64,
}

impl CoefficientRow {
    pub fn new(feature: impl Into<String>, value: f64) -> Self {
        Self {
            feature: feature.into(),
            value,
        }
    }
}
