// File: crates/profit-chart/src/record.rs
// Summary: Profit record model and metric selector.
// Notes:
// - A record is a strictly-typed row, so a metric can never be "missing";
//   the selector always reads a concrete f64.

use serde::{Deserialize, Serialize};

/// One time-stamped financial data point of a report source.
/// `time` is an opaque period label (timestamp, date, bar index) and is
/// never interpreted here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfitRecord {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "TotalProfit")]
    pub total_profit: f64,
}

impl ProfitRecord {
    pub fn new(time: impl Into<String>, profit: f64, total_profit: f64) -> Self {
        Self { time: time.into(), profit, total_profit }
    }
}

/// Field selector that drives a chart: per-period profit or the
/// cumulative running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Profit,
    TotalProfit,
}

impl Metric {
    /// Read the selected field from a record.
    pub fn value_of(&self, record: &ProfitRecord) -> f64 {
        match self {
            Metric::Profit => record.profit,
            Metric::TotalProfit => record.total_profit,
        }
    }

    /// Human-facing series name, as shown in the chart legend.
    pub fn series_name(&self) -> &'static str {
        match self {
            Metric::Profit => "Profit",
            Metric::TotalProfit => "Total Profit",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown metric selector '{0}', expected 'profit' or 'total-profit'")]
pub struct ParseMetricError(pub String);

impl std::str::FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "profit" => Ok(Metric::Profit),
            "total-profit" | "totalprofit" | "total_profit" => Ok(Metric::TotalProfit),
            other => Err(ParseMetricError(other.to_string())),
        }
    }
}
