//! End-to-end facade: trace in, draw commands out.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chart::{self, ChartStyle};
use crate::color::{self, ColorAssignment, ColorTuning, PaletteOverflow};
use crate::error::GanttResult;
use crate::render::{ChartFrame, Renderer};
use crate::timeline::{self, Granularity, GroupingTuning};
use crate::trace::{self, ParsedTrace};

/// Which color assignment policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorPolicy {
    /// Fixed ten-entry palette over lexicographically sorted labels.
    Discrete { overflow: PaletteOverflow },
    /// Feature-derived RGB from identity (function, line, end marker) ranks.
    Continuous,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::Continuous
    }
}

/// Serializable pipeline configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineChartConfig {
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default)]
    pub color_policy: ColorPolicy,
    #[serde(default)]
    pub grouping_tuning: GroupingTuning,
    #[serde(default)]
    pub color_tuning: ColorTuning,
    #[serde(default)]
    pub style: ChartStyle,
}

/// One fully materialized timeline chart: the parsed trace, its color
/// assignment and the resulting draw-command frame.
///
/// All three artifacts are immutable once built; rendering can repeat
/// against any number of backends.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineChart {
    trace: ParsedTrace,
    colors: ColorAssignment,
    frame: ChartFrame,
}

impl TimelineChart {
    pub fn from_reader<R: Read>(reader: R, config: &TimelineChartConfig) -> GanttResult<Self> {
        let trace = trace::parse_trace(reader)?;
        Self::from_trace(trace, config)
    }

    pub fn from_path(path: impl AsRef<Path>, config: &TimelineChartConfig) -> GanttResult<Self> {
        let trace = trace::parse_trace_path(path)?;
        Self::from_trace(trace, config)
    }

    pub fn from_trace(trace: ParsedTrace, config: &TimelineChartConfig) -> GanttResult<Self> {
        let colors = match config.color_policy {
            ColorPolicy::Discrete { overflow } => color::assign_discrete(&trace.labels, overflow)?,
            ColorPolicy::Continuous => color::assign_continuous(&trace.labels, config.color_tuning)?,
        };
        let timeline =
            timeline::group_events(&trace.events, config.granularity, config.grouping_tuning);
        let frame = chart::build_chart(&timeline, &colors, config.style)?;

        info!(
            events = trace.events.len(),
            labels = trace.labels.len(),
            rows = frame.ticks.len(),
            "timeline chart built"
        );
        Ok(Self {
            trace,
            colors,
            frame,
        })
    }

    #[must_use]
    pub fn trace(&self) -> &ParsedTrace {
        &self.trace
    }

    #[must_use]
    pub fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    #[must_use]
    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn render_into<R: Renderer>(&self, renderer: &mut R) -> GanttResult<()> {
        renderer.render(&self.frame)
    }
}
