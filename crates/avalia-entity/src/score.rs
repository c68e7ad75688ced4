//! Score arithmetic shared by the evaluation entities and result aggregation.

/// Lowest score a competency or deliverable may receive.
pub const MIN_SCORE: i32 = 1;
/// Highest score a competency or deliverable may receive.
pub const MAX_SCORE: i32 = 5;

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of integer scores rounded to two decimals.
pub fn score_average(scores: &[i32]) -> f64 {
    let as_float: Vec<f64> = scores.iter().map(|s| f64::from(*s)).collect();
    mean(&as_float).map(round2).unwrap_or(0.0)
}
