//! Weighted combination of the three forecasting methods into a single
//! authoritative forecast

use crate::accuracy::accuracy_score;
use crate::data::{SalesRecord, SalesSeries};
use crate::error::{ForecastError, Result};
use crate::models::exponential_smoothing::ExponentialSmoothing;
use crate::models::linear_trend::LinearTrend;
use crate::models::seasonal::Seasonal;
use crate::models::{future_dates, ForecastPoint, MethodForecaster, MIN_FORECAST_UNITS};
use crate::stats;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Trend strength above this selects the trend-dominant weight preset
pub const TREND_THRESHOLD: f64 = 0.7;

/// Seasonality strength above this selects the season-dominant preset
pub const SEASONALITY_THRESHOLD: f64 = 0.6;

/// Multiplier on the inter-method disagreement for the combined margin
const DISAGREEMENT_INTERVAL_FACTOR: f64 = 1.5;

/// Blend coefficients for the linear, exponential and seasonal methods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub linear: f64,
    pub exponential: f64,
    pub seasonal: f64,
}

impl BlendWeights {
    fn apply(&self, linear: f64, exponential: f64, seasonal: f64) -> f64 {
        self.linear * linear + self.exponential * exponential + self.seasonal * seasonal
    }
}

/// Preset favored when the series shows a dominant trend
pub const TREND_DOMINANT_WEIGHTS: BlendWeights = BlendWeights {
    linear: 0.5,
    exponential: 0.3,
    seasonal: 0.2,
};

/// Preset favored when the series shows dominant seasonality
pub const SEASON_DOMINANT_WEIGHTS: BlendWeights = BlendWeights {
    linear: 0.3,
    exponential: 0.2,
    seasonal: 0.5,
};

/// Default preset when neither signal dominates
pub const BALANCED_WEIGHTS: BlendWeights = BlendWeights {
    linear: 0.4,
    exponential: 0.3,
    seasonal: 0.3,
};

/// Pick the weight preset for the measured strengths.
///
/// Trend dominance is checked first; the checks are mutually exclusive.
pub fn select_weights(
    trend_strength: f64,
    seasonality_strength: f64,
) -> (BlendWeights, &'static str) {
    if trend_strength > TREND_THRESHOLD {
        (TREND_DOMINANT_WEIGHTS, "weighted ensemble (trend-dominant)")
    } else if seasonality_strength > SEASONALITY_THRESHOLD {
        (SEASON_DOMINANT_WEIGHTS, "weighted ensemble (season-dominant)")
    } else {
        (BALANCED_WEIGHTS, "weighted ensemble (balanced)")
    }
}

/// The combined forecast returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Predicted future periods, one per horizon step
    pub points: Vec<ForecastPoint>,
    /// In-sample fit accuracy, percentage in `[70, 95]`
    pub accuracy: f64,
    /// When this forecast was generated
    pub generated_at: DateTime<Utc>,
    /// Descriptive label of the blend that produced it
    pub method: String,
    /// Requested horizon length
    pub periods: usize,
}

impl ForecastResult {
    /// Serialize the result to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for ForecastResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast ({}, {} periods):", self.method, self.periods)?;
        for point in &self.points {
            writeln!(
                f,
                "  {}: {:.0} [{:.0}, {:.0}]",
                point.date, point.predicted, point.lower, point.upper
            )?;
        }
        writeln!(f, "  Accuracy: {:.1}%", self.accuracy)?;
        Ok(())
    }
}

/// Forecast future sales from raw host records.
///
/// This is the crate's single entry point: records are normalized into a
/// series, the three methods run independently, and their outputs are
/// blended with data-dependent weights.
pub fn forecast(records: &[SalesRecord], horizon: usize) -> Result<ForecastResult> {
    let series = SalesSeries::from_records(records)?;
    forecast_series(&series, horizon)
}

/// Forecast future sales from an already-normalized series
pub fn forecast_series(series: &SalesSeries, horizon: usize) -> Result<ForecastResult> {
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "Horizon must be at least 1".to_string(),
        ));
    }

    let values = series.values();
    let trend_strength = stats::trend_strength(values);
    let seasonality_strength = stats::seasonality_strength(values);
    let (weights, method) = select_weights(trend_strength, seasonality_strength);
    debug!(
        "trend={:.3} seasonality={:.3} -> {}",
        trend_strength, seasonality_strength, method
    );

    let linear = LinearTrend::new();
    let exponential = ExponentialSmoothing::default();
    let seasonal = Seasonal::new();

    let linear_points = linear.forecast(series, horizon)?;
    let exponential_points = exponential.forecast(series, horizon)?;
    let seasonal_points = seasonal.forecast(series, horizon)?;

    let dates = future_dates(series.last_date(), horizon);
    let mut points = Vec::with_capacity(horizon);
    for (i, date) in dates.into_iter().enumerate() {
        let raw = [
            linear_points[i].predicted,
            exponential_points[i].predicted,
            seasonal_points[i].predicted,
        ];
        let predicted = weights
            .apply(raw[0], raw[1], raw[2])
            .round()
            .max(MIN_FORECAST_UNITS);

        // The interval reflects how much the methods disagree, not any
        // single method's own variance
        let margin = (DISAGREEMENT_INTERVAL_FACTOR * stats::std_dev(&raw)).round();

        points.push(ForecastPoint {
            date,
            predicted,
            lower: (predicted - margin).max(0.0),
            upper: predicted + margin,
        });
    }

    let linear_fit = linear.fitted(series);
    let exponential_fit = exponential.fitted(series);
    let seasonal_fit = seasonal.fitted(series);
    let fitted: Vec<f64> = linear_fit
        .iter()
        .zip(&exponential_fit)
        .zip(&seasonal_fit)
        .map(|((&l, &e), &s)| weights.apply(l, e, s))
        .collect();
    let accuracy = accuracy_score(values, &fitted);

    Ok(ForecastResult {
        points,
        accuracy,
        generated_at: Utc::now(),
        method: method.to_string(),
        periods: horizon,
    })
}
