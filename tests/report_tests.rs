//! Report Integration Tests
//!
//! Whole-farm evaluation, scenario comparison and formatting.

use approx::assert_relative_eq;
use farm_yield_rust::{
    CalculatorConfig, Crop, EnvironmentReading, FactorTable, Farm, FarmCalculator, FarmReport,
    JsonFormatter, MarkdownFormatter, MissingLabelPolicy, Plant,
};

fn farm() -> Farm {
    let corn = Plant::new("corn", 3.0).with_costs(4.0).with_sale_price(5.0).with_factor(
        FactorTable::new()
            .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)])
            .with_factor("wind", [("low", 0.0), ("medium", -25.0), ("high", -50.0)]),
    );
    let avocado = Plant::new("avocado", 4.0).with_costs(5.0).with_sale_price(6.0).with_factor(
        FactorTable::new()
            .with_factor("sun", [("low", -20.0), ("medium", 0.0), ("high", 50.0)])
            .with_factor("wind", [("low", 0.0), ("medium", -30.0), ("high", -60.0)]),
    );
    [Crop::new(corn, 5.0), Crop::new(avocado, 2.0)].into_iter().collect()
}

#[test]
fn test_report_sun_and_wind_high() {
    let calc = FarmCalculator::default();
    let reading = EnvironmentReading::new().with("sun", "high").with("wind", "high");

    let report = calc.evaluate(&farm(), Some(&reading)).unwrap();

    assert_eq!(report.crops.len(), 2);
    assert_eq!(report.crops[0].plant, "corn");
    assert_eq!(report.crops[1].plant, "avocado");
    assert_relative_eq!(report.crops[1].factor, 0.6, epsilon = 1e-12);
    assert_relative_eq!(report.crops[1].yield_amount, 4.8, epsilon = 1e-9);
    assert_relative_eq!(report.total_yield, 16.05, epsilon = 1e-9);
    assert_eq!(report.total_cost, 30.0);
    assert_relative_eq!(report.total_revenue, 85.05, epsilon = 1e-9);
    assert_relative_eq!(report.total_profit, 55.05, epsilon = 1e-9);
    assert_eq!(report.most_profitable().unwrap().plant, "corn");
}

#[test]
fn test_scenario_comparison() {
    let calc = FarmCalculator::default();
    let readings: Vec<EnvironmentReading> = ["low", "medium", "high"]
        .iter()
        .map(|wind| EnvironmentReading::new().with("sun", "medium").with("wind", *wind))
        .collect();

    let reports = calc.evaluate_scenarios(&farm(), &readings).unwrap();
    let profits: Vec<f64> = reports.iter().map(|r| r.total_profit).collect();

    // Wind only hurts: profit falls as wind rises
    assert_eq!(profits[0], 93.0);
    assert!(profits[0] > profits[1]);
    assert!(profits[1] > profits[2]);

    for (report, reading) in reports.iter().zip(&readings) {
        let single = calc.evaluate(&farm(), Some(reading)).unwrap();
        assert_eq!(report, &single);
    }
}

#[test]
fn test_report_json_round_trip_and_markdown() {
    let calc = FarmCalculator::default();
    let report = calc.evaluate(&farm(), None).unwrap();

    let json = JsonFormatter::format(&report).unwrap();
    let parsed: FarmReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);

    let md = MarkdownFormatter::format(&report);
    assert!(md.contains("| avocado | 2 | 1.000 | 8.00 | 10.00 | 48.00 | 38.00 |"));
    assert!(md.contains("- **Profit:** 93.00"));
}

#[test]
fn test_propagated_nan_report_round_trips() {
    let calc = FarmCalculator::new(
        CalculatorConfig::default().with_missing_label(MissingLabelPolicy::Propagate),
    );
    let mut farm = farm();
    farm.crops.push(Crop::new(Plant::new("bean", 2.0).with_costs(1.0).with_sale_price(3.0), 4.0));
    let reading = EnvironmentReading::new().with("sun", "eclipse");

    let report = calc.evaluate(&farm, Some(&reading)).unwrap();
    assert!(report.total_profit.is_nan());

    let json = JsonFormatter::format_compact(&report).unwrap();
    let parsed: FarmReport = serde_json::from_str(&json).unwrap();

    // Poisoned crops come back NaN, the unaffected one is intact
    assert!(parsed.crops[0].yield_amount.is_nan());
    assert!(parsed.crops[1].revenue.is_nan());
    assert_eq!(parsed.crops[2].plant, "bean");
    assert_eq!(parsed.crops[2].yield_amount, 8.0);
    assert_eq!(parsed.crops[2].profit, 20.0);
    assert!(parsed.total_yield.is_nan());
    assert!(parsed.total_profit.is_nan());
    assert_eq!(parsed.total_cost, report.total_cost);
    assert_eq!(parsed.reading, report.reading);
}
