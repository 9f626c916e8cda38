//! Exponential smoothing (level + trend) forecasting

use crate::data::SalesSeries;
use crate::error::{ForecastError, Result};
use crate::models::{future_dates, ForecastPoint, MethodForecaster};

/// Fixed smoothing constant; not tuned per series
pub const SMOOTHING_ALPHA: f64 = 0.3;

/// Multiplier on `sqrt(level)` for the interval half-width
const LEVEL_INTERVAL_FACTOR: f64 = 1.2;

/// Level-plus-trend exponential smoothing forecaster.
///
/// The level starts at the last observation and the trend at the last first
/// difference. Beyond the first step there are no actuals left, so each
/// update feeds the method's own previous forecast back into the recursion,
/// compounding estimates forward.
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    name: String,
    alpha: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing forecaster
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("exponential smoothing (alpha={})", alpha),
            alpha,
        })
    }

    /// Smoothing constant in use
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self {
            name: format!("exponential smoothing (alpha={})", SMOOTHING_ALPHA),
            alpha: SMOOTHING_ALPHA,
        }
    }
}

impl MethodForecaster for ExponentialSmoothing {
    fn forecast(&self, series: &SalesSeries, horizon: usize) -> Result<Vec<ForecastPoint>> {
        let values = series.values();
        let n = values.len();

        let mut level = values[n - 1];
        let mut trend = values[n - 1] - values[n - 2];

        let mut points = Vec::with_capacity(horizon);
        for date in future_dates(series.last_date(), horizon) {
            let projected = level + trend;
            let predicted = projected.max(0.0);
            let half_width = level.max(0.0).sqrt() * LEVEL_INTERVAL_FACTOR;
            points.push(ForecastPoint {
                date,
                predicted,
                lower: (predicted - half_width).max(0.0),
                upper: predicted + half_width,
            });

            // Self-referential update: the forecast stands in for the
            // observation it predicts
            let previous_level = level;
            level = self.alpha * projected + (1.0 - self.alpha) * (level + trend);
            trend = self.alpha * (level - previous_level) + (1.0 - self.alpha) * trend;
        }

        Ok(points)
    }

    fn fitted(&self, series: &SalesSeries) -> Vec<f64> {
        let values = series.values();
        let mut fitted = Vec::with_capacity(values.len());
        let mut level = values[0];

        // One-step-ahead predictions over the actual series
        fitted.push(level);
        for i in 1..values.len() {
            level = self.alpha * values[i - 1] + (1.0 - self.alpha) * level;
            fitted.push(level);
        }

        fitted
    }

    fn name(&self) -> &str {
        &self.name
    }
}
