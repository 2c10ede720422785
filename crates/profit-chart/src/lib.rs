// File: crates/profit-chart/src/lib.rs
// Summary: Core library entry point; exports public API for profit series and chart configs.

pub mod record;
pub mod series;
pub mod config;
pub mod target;

pub use record::{Metric, ParseMetricError, ProfitRecord};
pub use series::ChartSeries;
pub use config::{ChartConfig, ChartData, Dataset};
pub use target::{draw_profit, draw_total_profit, CollectTarget, JsonWriter, RenderTarget, TargetError};
