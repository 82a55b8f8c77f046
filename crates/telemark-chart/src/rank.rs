//! Ranking and positional slicing of the coefficient table.

use telemark_model::CoefficientRow;

/// Sort descending by coefficient value. The sort is stable, so rows with
/// equal values keep their original file order.
pub fn rank_coefficients(mut rows: Vec<CoefficientRow>) -> Vec<CoefficientRow> {
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows
}

/// First `n` rows of the ranked table; shorter tables yield what they have.
pub fn top_slice(ranked: &[CoefficientRow], n: usize) -> &[CoefficientRow] {
    &ranked[..n.min(ranked.len())]
}

/// Last `m` rows of the ranked table; shorter tables yield what they have.
pub fn bottom_slice(ranked: &[CoefficientRow], m: usize) -> &[CoefficientRow] {
    &ranked[ranked.len() - m.min(ranked.len())..]
}

/// Displayed value label: two decimal places, round-half-to-even over the
/// stored binary value.
pub fn format_label(value: f64) -> String {
    format!("{value:.2}")
}
