use serde::{Deserialize, Serialize};

use crate::error::GanttResult;
use crate::render::{IntervalBar, LegendEntry, TickLabel};

/// Backend-agnostic scene for one timeline draw pass.
///
/// Coordinates stay in trace domain units (microseconds horizontally, worker
/// rows vertically); a rendering backend owns the mapping to pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<IntervalBar>,
    pub ticks: Vec<TickLabel>,
    pub legend: Vec<LegendEntry>,
}

impl ChartFrame {
    #[must_use]
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars: Vec::new(),
            ticks: Vec::new(),
            legend: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bar(mut self, bar: IntervalBar) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_tick(mut self, tick: TickLabel) -> Self {
        self.ticks.push(tick);
        self
    }

    #[must_use]
    pub fn with_legend_entry(mut self, entry: LegendEntry) -> Self {
        self.legend.push(entry);
        self
    }

    pub fn validate(&self) -> GanttResult<()> {
        for bar in &self.bars {
            bar.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }
        for entry in &self.legend {
            entry.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.ticks.is_empty() && self.legend.is_empty()
    }
}
