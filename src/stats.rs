//! Statistic primitives shared by the forecasting methods

use statrs::statistics::Statistics;

/// Fixed length of the repeating seasonal pattern
pub const SEASONAL_PATTERN_LEN: usize = 4;

/// Number of equal-width segments used to estimate seasonality strength
const SEASONALITY_SEGMENTS: usize = 4;

/// Minimum series length for seasonality estimation to be meaningful
pub const MIN_SEASONAL_POINTS: usize = 8;

/// Mean of a value sequence; 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::mean(values)
}

/// Population standard deviation (divide by N); 0 for an empty slice
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::population_std_dev(values)
}

/// How much the series' mean shifts from its first half to its second half,
/// normalized to `[0, 1]`.
///
/// Returns 0 for sequences shorter than 2 and for a zero first-half mean
/// (a ratio against zero would poison every downstream weight).
pub fn trend_strength(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let mid = values.len() / 2;
    let first_mean = mean(&values[..mid]);
    let second_mean = mean(&values[mid..]);

    if first_mean == 0.0 {
        return 0.0;
    }

    ((second_mean - first_mean).abs() / first_mean).min(1.0)
}

/// How much a fixed-length repeating pattern explains variation in the
/// series, normalized to `[0, 1]`.
///
/// Splits the series into [`SEASONALITY_SEGMENTS`] equal-width segments and
/// averages the cross-segment coefficient of variation at each position.
/// Returns 0 for series shorter than [`MIN_SEASONAL_POINTS`].
pub fn seasonality_strength(values: &[f64]) -> f64 {
    if values.len() < MIN_SEASONAL_POINTS {
        return 0.0;
    }

    let segment_len = values.len() / SEASONALITY_SEGMENTS;
    let mut coefficients = Vec::with_capacity(segment_len);

    for position in 0..segment_len {
        let cross_segment: Vec<f64> = (0..SEASONALITY_SEGMENTS)
            .map(|segment| values[segment * segment_len + position])
            .collect();

        let position_mean = mean(&cross_segment);
        // Zero-mean positions contribute no measurable variation
        let coefficient = if position_mean == 0.0 {
            0.0
        } else {
            std_dev(&cross_segment) / position_mean
        };
        coefficients.push(coefficient);
    }

    mean(&coefficients).clamp(0.0, 1.0)
}

/// Per-phase multiplicative seasonal indices over a fixed pattern of
/// [`SEASONAL_PATTERN_LEN`] periods.
///
/// Each phase's index is the mean of every 4th value starting at that phase,
/// divided by the overall series mean. Phases with no values, or a zero
/// overall mean, default to 1.0.
pub fn seasonal_pattern(values: &[f64]) -> [f64; SEASONAL_PATTERN_LEN] {
    let mut pattern = [1.0; SEASONAL_PATTERN_LEN];
    let overall_mean = mean(values);
    if overall_mean == 0.0 {
        return pattern;
    }

    for (phase, index) in pattern.iter_mut().enumerate() {
        let phase_values: Vec<f64> = values
            .iter()
            .skip(phase)
            .step_by(SEASONAL_PATTERN_LEN)
            .copied()
            .collect();
        if !phase_values.is_empty() {
            *index = mean(&phase_values) / overall_mean;
        }
    }

    pattern
}
