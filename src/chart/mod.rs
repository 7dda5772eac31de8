use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::ColorAssignment;
use crate::error::{GanttError, GanttResult};
use crate::render::{BarSegment, ChartFrame, IntervalBar, LegendEntry, TickLabel};
use crate::timeline::{Granularity, Timeline};

pub const X_AXIS_LABEL: &str = "microseconds since start";
pub const Y_AXIS_LABEL: &str = "gtid";

/// Visual tuning for the emitted frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Bar thickness in row units, in `(0, 1]`. Values below 1 leave a
    /// gutter between adjacent worker rows.
    pub bar_height: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { bar_height: 0.9 }
    }
}

/// Turns row groups plus the color mapping into a [`ChartFrame`].
///
/// Per group: one interval bar at `row_index + sub_row_offset` whose
/// segments are `(start_us, end_us - start_us)` filled with the label's
/// assigned color. Fine-granularity bars shrink to the sub-row step so
/// stacked label runs of one worker do not overdraw each other. The frame
/// ends with one tick per distinct worker and one legend entry per mapping
/// key, in mapping iteration order.
pub fn build_chart(
    timeline: &Timeline<'_>,
    colors: &ColorAssignment,
    style: ChartStyle,
) -> GanttResult<ChartFrame> {
    if !style.bar_height.is_finite() || !(0.0..=1.0).contains(&style.bar_height)
        || style.bar_height == 0.0
    {
        return Err(GanttError::InvalidData(
            "bar height must be finite and in (0, 1]".to_owned(),
        ));
    }

    let bar_height = match timeline.granularity() {
        Granularity::Coarse => style.bar_height,
        Granularity::Fine if timeline.sub_row_step() > 0.0 => {
            style.bar_height * timeline.sub_row_step()
        }
        Granularity::Fine => style.bar_height,
    };

    let mut frame = ChartFrame::new(X_AXIS_LABEL, Y_AXIS_LABEL);

    for group in timeline.groups() {
        let mut segments = Vec::with_capacity(group.events.len());
        for event in &group.events {
            let fill = colors.get(&event.label).copied().ok_or_else(|| {
                GanttError::InvalidData(format!(
                    "no color assigned for label `{}`",
                    event.label
                ))
            })?;
            segments.push(BarSegment::new(
                event.start_us,
                event.end_us - event.start_us,
                fill,
            ));
        }
        frame.bars.push(IntervalBar::new(
            group.row_index as f64 + group.sub_row_offset,
            bar_height,
            segments,
        ));
    }

    for (row, text) in timeline.tick_labels() {
        frame.ticks.push(TickLabel::new(row, text));
    }

    for (label, color) in colors {
        frame.legend.push(LegendEntry::new(label.clone(), *color));
    }

    debug!(
        bars = frame.bars.len(),
        ticks = frame.ticks.len(),
        legend = frame.legend.len(),
        "built chart frame"
    );
    Ok(frame)
}
