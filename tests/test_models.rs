use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use sales_forecast::data::SalesSeries;
use sales_forecast::error::ForecastError;
use sales_forecast::models::exponential_smoothing::ExponentialSmoothing;
use sales_forecast::models::linear_trend::LinearTrend;
use sales_forecast::models::seasonal::Seasonal;
use sales_forecast::models::MethodForecaster;

fn daily_series(values: Vec<f64>) -> SalesSeries {
    let dates = (0..values.len())
        .map(|i| {
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(i as u64))
                .unwrap()
        })
        .collect();
    SalesSeries::new(dates, values).unwrap()
}

#[test]
fn test_linear_trend_on_perfect_line() {
    let series = daily_series(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    let model = LinearTrend::new();

    let points = model.forecast(&series, 2).unwrap();
    assert_eq!(points.len(), 2);

    // Zero residuals give a zero margin and an exact projection
    assert_approx_eq!(points[0].predicted, 60.0);
    assert_approx_eq!(points[1].predicted, 70.0);
    assert_approx_eq!(points[0].lower, points[0].upper);

    let fitted = model.fitted(&series);
    assert_eq!(fitted.len(), series.len());
    assert_approx_eq!(fitted[0], 10.0);
    assert_approx_eq!(fitted[4], 50.0);
}

#[test]
fn test_linear_trend_never_predicts_below_floor() {
    // Steep decline projects to zero and below; the floor holds at 10
    let series = daily_series(vec![100.0, 80.0, 60.0, 40.0, 20.0]);
    let points = LinearTrend::new().forecast(&series, 3).unwrap();

    for point in &points {
        assert!(point.predicted >= 10.0);
        assert!(point.lower >= 0.0);
        assert!(point.lower <= point.predicted && point.predicted <= point.upper);
    }
}

#[test]
fn test_exponential_smoothing_projects_its_own_forecast() {
    // Level starts at the last value, trend at the last first-difference;
    // with nothing to correct against, the recursion extends the line
    let series = daily_series(vec![10.0, 12.0, 14.0, 16.0, 18.0]);
    let points = ExponentialSmoothing::default().forecast(&series, 3).unwrap();

    assert_approx_eq!(points[0].predicted, 20.0);
    assert_approx_eq!(points[1].predicted, 22.0);
    assert_approx_eq!(points[2].predicted, 24.0);
}

#[test]
fn test_exponential_smoothing_interval_and_floor() {
    let series = daily_series(vec![50.0, 30.0, 10.0]);
    let points = ExponentialSmoothing::default().forecast(&series, 4).unwrap();

    for point in &points {
        assert!(point.predicted >= 0.0);
        assert!(point.lower >= 0.0);
        assert!(point.lower <= point.predicted && point.predicted <= point.upper);
    }
}

#[test]
fn test_exponential_smoothing_fitted_is_one_step_ahead() {
    let series = daily_series(vec![10.0, 20.0, 30.0]);
    let model = ExponentialSmoothing::new(0.5).unwrap();

    let fitted = model.fitted(&series);
    assert_eq!(fitted.len(), 3);
    assert_approx_eq!(fitted[0], 10.0);
    assert_approx_eq!(fitted[1], 10.0);
    assert_approx_eq!(fitted[2], 15.0);
}

#[test]
fn test_exponential_smoothing_alpha_validation() {
    assert!(matches!(
        ExponentialSmoothing::new(0.0),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(matches!(
        ExponentialSmoothing::new(1.5),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert_approx_eq!(ExponentialSmoothing::default().alpha(), 0.3);
}

#[test]
fn test_seasonal_follows_pattern_with_drift() {
    let series = daily_series(vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0, 10.0, 20.0]);
    let points = Seasonal::new().forecast(&series, 2).unwrap();

    // Base level is the mean of the last 4 observations (15); the next
    // phase index is 10/15, then 20/15, each with compounding drift
    assert_approx_eq!(points[0].predicted, 15.0 * (10.0 / 15.0) * 1.02);
    assert_approx_eq!(points[1].predicted, 15.0 * (20.0 / 15.0) * 1.04);

    let half_width = 15.0f64.sqrt() * 1.3;
    assert_approx_eq!(points[0].upper - points[0].predicted, half_width);
}

#[test]
fn test_seasonal_falls_back_to_average_on_short_series() {
    // Fewer than 8 points: flat average with 1% linear drift per step
    let series = daily_series(vec![20.0, 20.0, 20.0, 20.0, 20.0]);
    let points = Seasonal::new().forecast(&series, 3).unwrap();

    assert_approx_eq!(points[0].predicted, 20.2);
    assert_approx_eq!(points[1].predicted, 20.4);
    assert_approx_eq!(points[2].predicted, 20.6);

    // Noiseless series gives a zero fallback margin
    assert_approx_eq!(points[0].upper - points[0].predicted, 0.0);
}

#[test]
fn test_seasonal_fitted_series() {
    let series = daily_series(vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0, 10.0, 20.0]);
    let fitted = Seasonal::new().fitted(&series);

    assert_eq!(fitted.len(), 8);
    assert_approx_eq!(fitted[0], 10.0);
    assert_approx_eq!(fitted[1], 20.0);

    // Short series fall back to the overall mean
    let short = daily_series(vec![10.0, 20.0, 30.0]);
    let flat = Seasonal::new().fitted(&short);
    assert_eq!(flat, vec![20.0; 3]);
}

#[test]
fn test_all_methods_emit_weekly_buckets() {
    let series = daily_series(vec![10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0]);
    let last = series.last_date();

    let methods: Vec<Box<dyn MethodForecaster>> = vec![
        Box::new(LinearTrend::new()),
        Box::new(ExponentialSmoothing::default()),
        Box::new(Seasonal::new()),
    ];

    for method in methods {
        let points = method.forecast(&series, 5).unwrap();
        assert_eq!(points.len(), 5, "{}", method.name());
        for (i, point) in points.iter().enumerate() {
            let expected = last + chrono::Duration::days(7 * (i as i64 + 1));
            assert_eq!(point.date, expected, "{}", method.name());
        }
    }
}
