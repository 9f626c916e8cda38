use assert_approx_eq::assert_approx_eq;
use sales_forecast::accuracy::{accuracy_score, ACCURACY_CAP, ACCURACY_FLOOR, DEFAULT_ACCURACY};

#[test]
fn test_mismatched_inputs_fall_back() {
    assert_approx_eq!(accuracy_score(&[], &[]), DEFAULT_ACCURACY);
    assert_approx_eq!(accuracy_score(&[1.0, 2.0], &[1.0]), DEFAULT_ACCURACY);
}

#[test]
fn test_perfect_fit_hits_the_cap() {
    let actual = vec![10.0, 20.0, 30.0];
    assert_approx_eq!(accuracy_score(&actual, &actual), ACCURACY_CAP);
}

#[test]
fn test_terrible_fit_hits_the_floor() {
    let actual = vec![100.0, 100.0, 100.0];
    let fitted = vec![0.0, 0.0, 0.0];
    assert_approx_eq!(accuracy_score(&actual, &fitted), ACCURACY_FLOOR);
}

#[test]
fn test_mape_in_the_open_range() {
    // Four entries 20% off, one zero actual excluded from the error sum but
    // still counted in the denominator: MAPE = 0.8 / 5 * 100 = 16
    let actual = vec![0.0, 100.0, 100.0, 100.0, 100.0];
    let fitted = vec![999.0, 80.0, 80.0, 80.0, 80.0];
    assert_approx_eq!(accuracy_score(&actual, &fitted), 84.0);
}

#[test]
fn test_all_zero_actuals_report_the_cap() {
    // Nothing accumulates, so the raw score is 100, clamped to the cap
    let actual = vec![0.0, 0.0, 0.0];
    let fitted = vec![5.0, 5.0, 5.0];
    assert_approx_eq!(accuracy_score(&actual, &fitted), ACCURACY_CAP);
}
