use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> GanttResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GanttError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One horizontal bar segment: `[start_us, start_us + duration_us)`.
///
/// A zero or negative duration is allowed and draws as a degenerate bar;
/// trusted trace input is not range-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    pub start_us: i64,
    pub duration_us: i64,
    pub fill: Color,
}

impl BarSegment {
    #[must_use]
    pub const fn new(start_us: i64, duration_us: i64, fill: Color) -> Self {
        Self {
            start_us,
            duration_us,
            fill,
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        self.fill.validate()
    }
}

/// Draw command for one timeline row: a run of segments at a shared
/// vertical position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalBar {
    /// Row baseline in row units (integer worker row plus sub-row offset).
    pub y: f64,
    /// Bar thickness in row units.
    pub height: f64,
    pub segments: Vec<BarSegment>,
}

impl IntervalBar {
    #[must_use]
    pub fn new(y: f64, height: f64, segments: Vec<BarSegment>) -> Self {
        Self {
            y,
            height,
            segments,
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.y.is_finite() {
            return Err(GanttError::InvalidData(
                "interval bar position must be finite".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(GanttError::InvalidData(
                "interval bar height must be finite and > 0".to_owned(),
            ));
        }
        if self.segments.is_empty() {
            return Err(GanttError::InvalidData(
                "interval bar must carry at least one segment".to_owned(),
            ));
        }
        for segment in &self.segments {
            segment.validate()?;
        }
        Ok(())
    }
}

/// Y-axis tick: one per distinct worker row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub row: usize,
    pub text: String,
}

impl TickLabel {
    #[must_use]
    pub fn new(row: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            text: text.into(),
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        if self.text.is_empty() {
            return Err(GanttError::InvalidData(
                "tick label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Legend swatch: one per distinct task label in the color mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        if self.label.is_empty() {
            return Err(GanttError::InvalidData(
                "legend entry label must not be empty".to_owned(),
            ));
        }
        self.color.validate()
    }
}
