mod frame;
mod null_renderer;
mod primitives;

pub use frame::ChartFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{BarSegment, Color, IntervalBar, LegendEntry, TickLabel};

use crate::error::GanttResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartFrame` so
/// drawing code remains isolated from trace and grouping logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> GanttResult<()>;
}
