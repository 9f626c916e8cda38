use chrono::NaiveDate;
use sales_forecast::{forecast, SalesRecord};

// The dashboard offers 4/8/12/16-week presets; the engine accepts any
// positive horizon
const HORIZON_PRESETS: [usize; 4] = [4, 8, 12, 16];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: Horizon Presets");
    println!("===============================\n");

    let history = create_seasonal_history();
    println!("History: {} daily rows\n", history.len());

    for horizon in HORIZON_PRESETS {
        let result = forecast(&history, horizon)?;
        let last = &result.points[result.points.len() - 1];
        println!(
            "{:>2} weeks -> final period {} at {:.0} units ({}, {:.1}% accuracy)",
            horizon, last.date, last.predicted, result.method, result.accuracy
        );
    }

    Ok(())
}

fn create_seasonal_history() -> Vec<SalesRecord> {
    // A repeating 4-day cycle over a flat base level
    let cycle = [80.0, 20.0, 20.0, 80.0];

    (0..16)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(2024, 4, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(i as u64))
                .unwrap();
            SalesRecord::new(date, cycle[i as usize % cycle.len()])
        })
        .collect()
}
