// File: crates/profit-chart/src/config.rs
// Summary: Line-chart configuration model matching the external charting collaborator's schema.

use serde::Serialize;

use crate::record::{Metric, ProfitRecord};
use crate::series::ChartSeries;

/// Fill palette for the "Total Profit" dataset.
pub const TOTAL_PROFIT_PALETTE: [&str; 5] = [
    "rgba(54, 162, 235, 0.2)",
    "rgba(255, 206, 86, 0.2)",
    "rgba(75, 192, 192, 0.2)",
    "rgba(153, 102, 255, 0.2)",
    "rgba(255, 159, 64, 0.2)",
];

/// Fill palette for the "Profit" dataset.
pub const PROFIT_PALETTE: [&str; 6] = [
    "rgba(255, 99, 132, 0.2)",
    "rgba(54, 162, 235, 0.2)",
    "rgba(255, 206, 86, 0.2)",
    "rgba(75, 192, 192, 0.2)",
    "rgba(153, 102, 255, 0.2)",
    "rgba(255, 159, 64, 0.2)",
];

/// One dataset of a chart: legend label, plotted values, fill hints.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
}

/// The `data` block of a chart config; `labels` is shared by all
/// datasets and must match each dataset's point count.
#[derive(Clone, Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Complete configuration handed to the charting collaborator.
/// Serializes to the collaborator's schema (`type`, `backgroundColor`).
#[derive(Clone, Debug, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
}

impl ChartConfig {
    /// Line chart for one metric: builds the filtered series and wraps
    /// it in a single dataset with the given fill palette.
    pub fn line(source: &[ProfitRecord], metric: Metric, palette: &[&str]) -> Self {
        let series = ChartSeries::build(source, metric);
        let dataset = Dataset {
            label: metric.series_name().to_string(),
            data: series.values,
            background_color: palette.iter().map(|c| c.to_string()).collect(),
        };
        Self {
            chart_type: "line",
            data: ChartData { labels: series.labels, datasets: vec![dataset] },
        }
    }

    /// The "Total Profit" chart (cumulative running total per period).
    pub fn total_profit(source: &[ProfitRecord]) -> Self {
        Self::line(source, Metric::TotalProfit, &TOTAL_PROFIT_PALETTE)
    }

    /// The "Profit" chart (per-period profit).
    pub fn profit(source: &[ProfitRecord]) -> Self {
        Self::line(source, Metric::Profit, &PROFIT_PALETTE)
    }
}
