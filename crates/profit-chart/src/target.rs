// File: crates/profit-chart/src/target.rs
// Summary: Render target trait (injected render surface) and the profit chart entry points.

use std::io::Write;

use crate::config::ChartConfig;
use crate::record::ProfitRecord;

#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("writing chart config: {0}")]
    Io(#[from] std::io::Error),
    #[error("serializing chart config: {0}")]
    Json(#[from] serde_json::Error),
}

/// A surface that accepts a finished chart configuration. Callers hand
/// a target in explicitly; there is no ambient lookup of a surface by
/// identifier.
pub trait RenderTarget {
    fn id(&self) -> &'static str;
    /// Accept one chart configuration. A target may be rendered to any
    /// number of times; each call is independent.
    fn render(&mut self, config: &ChartConfig) -> Result<(), TargetError>;
}

/// Build the "Profit" chart from `source` and hand it to `target`.
pub fn draw_profit(target: &mut dyn RenderTarget, source: &[ProfitRecord]) -> Result<(), TargetError> {
    target.render(&ChartConfig::profit(source))
}

/// Build the "Total Profit" chart from `source` and hand it to `target`.
pub fn draw_total_profit(target: &mut dyn RenderTarget, source: &[ProfitRecord]) -> Result<(), TargetError> {
    target.render(&ChartConfig::total_profit(source))
}

/// Target that serializes each config as pretty JSON to an underlying
/// writer, one document per render call.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderTarget for JsonWriter<W> {
    fn id(&self) -> &'static str { "json_writer" }

    fn render(&mut self, config: &ChartConfig) -> Result<(), TargetError> {
        serde_json::to_writer_pretty(&mut self.writer, config)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Target that keeps every rendered config in memory, in render order.
#[derive(Default)]
pub struct CollectTarget {
    pub rendered: Vec<ChartConfig>,
}

impl CollectTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderTarget for CollectTarget {
    fn id(&self) -> &'static str { "collect" }

    fn render(&mut self, config: &ChartConfig) -> Result<(), TargetError> {
        self.rendered.push(config.clone());
        Ok(())
    }
}
