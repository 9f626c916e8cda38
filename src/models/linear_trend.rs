//! Linear trend forecasting via ordinary least squares

use crate::data::SalesSeries;
use crate::error::Result;
use crate::models::{future_dates, ForecastPoint, MethodForecaster, MIN_FORECAST_UNITS};
use crate::stats;

/// Multiplier on the forecast standard error for the interval margin
const STDERR_MARGIN_FACTOR: f64 = 2.0;

/// Ordinary-least-squares trend forecaster.
///
/// Fits `y = slope·x + intercept` over the observation indices and projects
/// the line forward, with an interval margin derived from the residual
/// standard deviation.
#[derive(Debug, Clone, Default)]
pub struct LinearTrend;

impl LinearTrend {
    /// Create a new linear trend forecaster
    pub fn new() -> Self {
        Self
    }
}

/// Least-squares slope and intercept over the index sequence `0..n`
fn fit_line(values: &[f64]) -> (f64, f64) {
    let x_mean = (values.len() - 1) as f64 / 2.0;
    let y_mean = stats::mean(values);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        numerator += (x - x_mean) * (y - y_mean);
        denominator += (x - x_mean) * (x - x_mean);
    }

    // A single point gives no spread in x; fall back to a flat line
    if denominator.abs() < 1e-10 {
        return (0.0, y_mean);
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;
    (slope, intercept)
}

impl MethodForecaster for LinearTrend {
    fn forecast(&self, series: &SalesSeries, horizon: usize) -> Result<Vec<ForecastPoint>> {
        let values = series.values();
        let n = values.len();
        let (slope, intercept) = fit_line(values);

        let residuals: Vec<f64> = values
            .iter()
            .enumerate()
            .map(|(i, &y)| y - (slope * i as f64 + intercept))
            .collect();
        let forecast_std_error =
            stats::std_dev(&residuals) * (1.0 + 1.0 / n as f64).sqrt();
        let margin = (STDERR_MARGIN_FACTOR * forecast_std_error).round();

        let points = future_dates(series.last_date(), horizon)
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let x = (n + i) as f64;
                let predicted = (slope * x + intercept).max(MIN_FORECAST_UNITS);
                ForecastPoint {
                    date,
                    predicted,
                    lower: (predicted - margin).max(0.0),
                    upper: predicted + margin,
                }
            })
            .collect();

        Ok(points)
    }

    fn fitted(&self, series: &SalesSeries) -> Vec<f64> {
        let values = series.values();
        let (slope, intercept) = fit_line(values);
        (0..values.len())
            .map(|i| slope * i as f64 + intercept)
            .collect()
    }

    fn name(&self) -> &str {
        "linear trend"
    }
}
