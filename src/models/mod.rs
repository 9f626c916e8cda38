//! Forecasting methods over a normalized sales series

use crate::data::SalesSeries;
use crate::error::Result;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Output periods are weekly buckets regardless of input granularity
pub const FORECAST_STEP_DAYS: i64 = 7;

/// No method or blend ever predicts fewer units than this
pub const MIN_FORECAST_UNITS: f64 = 10.0;

/// A single predicted future period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Date of the predicted period
    pub date: NaiveDate,
    /// Point estimate, never negative
    pub predicted: f64,
    /// Lower confidence bound, floored at 0
    pub lower: f64,
    /// Upper confidence bound
    pub upper: f64,
}

/// A forecasting method over a normalized series
pub trait MethodForecaster: Debug {
    /// Predict exactly `horizon` future weekly periods
    fn forecast(&self, series: &SalesSeries, horizon: usize) -> Result<Vec<ForecastPoint>>;

    /// In-sample fitted values, one per historical observation
    fn fitted(&self, series: &SalesSeries) -> Vec<f64>;

    /// Name of the method
    fn name(&self) -> &str;
}

/// Future period dates: `last + 7`, `last + 14`, ... for `horizon` steps
pub fn future_dates(last: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon as i64)
        .map(|step| last + Duration::days(FORECAST_STEP_DAYS * step))
        .collect()
}

pub mod exponential_smoothing;
pub mod linear_trend;
pub mod seasonal;
