use crate::report::types::FarmReport;

/// Markdown formatter for farm reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &FarmReport) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Farm Report\n\n");

        // Conditions, sorted for stable output
        match &report.reading {
            Some(reading) if !reading.is_empty() => {
                let mut conditions: Vec<_> = reading.iter().collect();
                conditions.sort_unstable();
                let text: Vec<String> = conditions
                    .iter()
                    .map(|(factor, label)| format!("{}: {}", factor, label))
                    .collect();
                md.push_str(&format!("**Conditions:** {}\n\n", text.join(", ")));
            }
            _ => md.push_str("**Conditions:** none (base yields)\n\n"),
        }

        if report.crops.is_empty() {
            md.push_str("*No crops planted.*\n\n");
        } else {
            md.push_str("| Plant | Planted | Factor | Yield | Cost | Revenue | Profit |\n");
            md.push_str("|---|---:|---:|---:|---:|---:|---:|\n");
            for crop in &report.crops {
                md.push_str(&format!(
                    "| {} | {} | {:.3} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
                    crop.plant,
                    crop.num_crops,
                    crop.factor,
                    crop.yield_amount,
                    crop.cost,
                    crop.revenue,
                    crop.profit
                ));
            }
            md.push('\n');
        }

        md.push_str("## Totals\n\n");
        md.push_str(&format!("- **Yield:** {:.2}\n", report.total_yield));
        md.push_str(&format!("- **Cost:** {:.2}\n", report.total_cost));
        md.push_str(&format!("- **Revenue:** {:.2}\n", report.total_revenue));
        md.push_str(&format!("- **Profit:** {:.2}\n", report.total_profit));

        if let Some(best) = report.most_profitable() {
            md.push_str(&format!("\n*Most profitable:* {} ({:.2})\n", best.plant, best.profit));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EnvironmentReading;
    use crate::report::types::CropReport;

    #[test]
    fn test_format_markdown() {
        let report = FarmReport::from_crops(
            vec![
                CropReport {
                    plant: "corn".to_string(),
                    num_crops: 5.0,
                    factor: 0.75,
                    yield_amount: 11.25,
                    cost: 20.0,
                    revenue: 56.25,
                    profit: 36.25,
                },
                CropReport {
                    plant: "avocado".to_string(),
                    num_crops: 2.0,
                    factor: 0.6,
                    yield_amount: 4.8,
                    cost: 10.0,
                    revenue: 28.8,
                    profit: 18.8,
                },
            ],
            Some(EnvironmentReading::new().with("wind", "high").with("sun", "high")),
        );

        let md = MarkdownFormatter::format(&report);

        assert!(md.contains("**Conditions:** sun: high, wind: high"));
        assert!(md.contains("| corn | 5 | 0.750 | 11.25 | 20.00 | 56.25 | 36.25 |"));
        assert!(md.contains("- **Profit:** 55.05"));
        assert!(md.contains("*Most profitable:* corn (36.25)"));
    }

    #[test]
    fn test_format_empty_farm() {
        let md = MarkdownFormatter::format(&FarmReport::from_crops(vec![], None));

        assert!(md.contains("none (base yields)"));
        assert!(md.contains("*No crops planted.*"));
        assert!(md.contains("- **Yield:** 0.00"));
        assert!(!md.contains("Most profitable"));
    }
}
