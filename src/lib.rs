//! # Sales Forecast
//!
//! A Rust library for forecasting future sales from irregular historical
//! observations.
//!
//! ## Features
//!
//! - Normalization of raw sales rows (heterogeneous date formats, duplicate
//!   dates, garbage rows) into a clean daily series
//! - Three independent forecasting methods: linear trend (OLS), exponential
//!   smoothing (level + trend) and seasonal adjustment
//! - Data-dependent blending: trend and seasonality strength pick the weight
//!   preset, and confidence intervals come from inter-method disagreement
//! - An in-sample accuracy score alongside every forecast
//!
//! The engine is a pure function of its inputs: no I/O, no shared state, no
//! randomness. Sourcing the records and persisting or rendering the result
//! are the caller's concerns.
//!
//! ## Quick Start
//!
//! ```
//! use sales_forecast::{forecast, SalesRecord};
//!
//! let history: Vec<SalesRecord> = (0..10)
//!     .map(|day| SalesRecord::new(format!("2024-03-{:02}", day + 1), 100.0 + day as f64))
//!     .collect();
//!
//! let result = forecast(&history, 4)?;
//! assert_eq!(result.points.len(), 4);
//! for point in &result.points {
//!     assert!(point.lower <= point.predicted && point.predicted <= point.upper);
//! }
//! # Ok::<(), sales_forecast::ForecastError>(())
//! ```

pub mod accuracy;
pub mod data;
pub mod ensemble;
pub mod error;
pub mod models;
pub mod stats;

// Re-export commonly used types
pub use crate::data::{parse_date, DateInput, SalesRecord, SalesSeries};
pub use crate::ensemble::{forecast, forecast_series, ForecastResult};
pub use crate::error::{ForecastError, Result};
pub use crate::models::ForecastPoint;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
