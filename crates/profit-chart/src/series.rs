// File: crates/profit-chart/src/series.rs
// Summary: Series builder; filters zero-valued records into paired label/value sequences.
// Notes:
// - Zero means "no entry for this period" in upstream report data, so
//   zero-valued records are dropped entirely rather than zero-filled.
//   The check is exact f64 equality against 0.0, no coercion.

use crate::record::{Metric, ProfitRecord};

/// Paired label/value sequences ready for a line-chart dataset.
/// Invariant: `labels.len() == values.len()`, and both are an
/// order-preserving subsequence of the source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Build a series from `source` by reading `metric` from each record
    /// in order. Records whose selected value is exactly zero are
    /// excluded from both sequences; everything else is passed through
    /// unchanged. An empty source yields an empty series.
    pub fn build(source: &[ProfitRecord], metric: Metric) -> Self {
        let mut labels = Vec::with_capacity(source.len());
        let mut values = Vec::with_capacity(source.len());
        for record in source {
            let value = metric.value_of(record);
            if value == 0.0 {
                continue;
            }
            values.push(value);
            labels.push(record.time.clone());
        }
        Self { labels, values }
    }

    /// Number of plotted points.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.labels.len(), self.values.len());
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
