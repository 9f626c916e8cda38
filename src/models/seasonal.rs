//! Seasonal forecasting via period-indexed multiplicative adjustment

use crate::data::SalesSeries;
use crate::error::Result;
use crate::models::{future_dates, ForecastPoint, MethodForecaster};
use crate::stats::{self, MIN_SEASONAL_POINTS, SEASONAL_PATTERN_LEN};

/// Compounding drift applied per forecast step when a pattern is available
const SEASONAL_DRIFT_RATE: f64 = 0.02;

/// Linear drift applied per step by the simple-average fallback
const AVERAGE_DRIFT_RATE: f64 = 0.01;

/// Multiplier on `sqrt(base level)` for the seasonal interval half-width
const SEASONAL_INTERVAL_FACTOR: f64 = 1.3;

/// Multiplier on the series standard deviation for the fallback margin
const AVERAGE_INTERVAL_FACTOR: f64 = 1.5;

/// Seasonal forecaster over a fixed 4-period pattern.
///
/// The base level is the mean of the last [`SEASONAL_PATTERN_LEN`]
/// observations, adjusted per step by the seasonal index of the step's phase
/// and a small compounding drift. Series shorter than
/// [`MIN_SEASONAL_POINTS`] carry no usable pattern and degrade to a flat
/// average with linear drift.
#[derive(Debug, Clone, Default)]
pub struct Seasonal;

impl Seasonal {
    /// Create a new seasonal forecaster
    pub fn new() -> Self {
        Self
    }

    fn forecast_average(&self, series: &SalesSeries, horizon: usize) -> Vec<ForecastPoint> {
        let average = series.mean();
        let margin = AVERAGE_INTERVAL_FACTOR * series.std_dev();

        future_dates(series.last_date(), horizon)
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let step = (i + 1) as f64;
                let predicted = (average * (1.0 + AVERAGE_DRIFT_RATE * step)).max(0.0);
                ForecastPoint {
                    date,
                    predicted,
                    lower: (predicted - margin).max(0.0),
                    upper: predicted + margin,
                }
            })
            .collect()
    }
}

impl MethodForecaster for Seasonal {
    fn forecast(&self, series: &SalesSeries, horizon: usize) -> Result<Vec<ForecastPoint>> {
        let values = series.values();
        let n = values.len();

        if n < MIN_SEASONAL_POINTS {
            return Ok(self.forecast_average(series, horizon));
        }

        let pattern = stats::seasonal_pattern(values);
        let base_level = stats::mean(&values[n - SEASONAL_PATTERN_LEN..]);
        let half_width = base_level.max(0.0).sqrt() * SEASONAL_INTERVAL_FACTOR;

        let points = future_dates(series.last_date(), horizon)
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let step = i + 1;
                let phase = (n + step - 1) % SEASONAL_PATTERN_LEN;
                let drift = 1.0 + SEASONAL_DRIFT_RATE * step as f64;
                let predicted = (base_level * pattern[phase] * drift).max(0.0);
                ForecastPoint {
                    date,
                    predicted,
                    lower: (predicted - half_width).max(0.0),
                    upper: predicted + half_width,
                }
            })
            .collect();

        Ok(points)
    }

    fn fitted(&self, series: &SalesSeries) -> Vec<f64> {
        let values = series.values();
        let overall_mean = stats::mean(values);

        if values.len() < MIN_SEASONAL_POINTS {
            return vec![overall_mean; values.len()];
        }

        let pattern = stats::seasonal_pattern(values);
        (0..values.len())
            .map(|i| overall_mean * pattern[i % SEASONAL_PATTERN_LEN])
            .collect()
    }

    fn name(&self) -> &str {
        "seasonal adjustment"
    }
}
