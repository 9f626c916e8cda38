use chrono::NaiveDate;
use sales_forecast::{forecast, SalesRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sales Forecast: Basic Example");
    println!("=============================\n");

    // Create sample data
    println!("Creating sample sales history...");
    let history = create_sample_history();
    println!("Sample history created: {} daily rows\n", history.len());

    // Generate a 4-week forecast
    println!("Generating forecast...");
    let result = forecast(&history, 4)?;

    println!("Method: {}", result.method);
    println!("Accuracy: {:.1}%\n", result.accuracy);

    println!("Forecast:");
    for (i, point) in result.points.iter().enumerate() {
        println!(
            "  Week {} ({}): {:.0} units ({:.0} - {:.0})",
            i + 1,
            point.date,
            point.predicted,
            point.lower,
            point.upper
        );
    }

    // Export as JSON the way the dashboard would
    println!("\nJSON export:");
    println!("{}", result.to_json()?);

    Ok(())
}

fn create_sample_history() -> Vec<SalesRecord> {
    let quantities = [
        42.0, 45.0, 44.0, 48.0, 47.0, 51.0, 50.0, 54.0, 53.0, 57.0, 56.0, 60.0,
    ];

    quantities
        .iter()
        .enumerate()
        .map(|(i, &quantity)| {
            let date = NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .checked_add_days(chrono::Days::new(i as u64))
                .unwrap();
            SalesRecord::new(date, quantity)
        })
        .collect()
}
