use crate::error::GanttResult;
use crate::render::{ChartFrame, Renderer};

/// No-op renderer used by tests and headless pipeline runs.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_bar_count: usize,
    pub last_segment_count: usize,
    pub last_tick_count: usize,
    pub last_legend_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> GanttResult<()> {
        frame.validate()?;
        self.last_bar_count = frame.bars.len();
        self.last_segment_count = frame.bars.iter().map(|bar| bar.segments.len()).sum();
        self.last_tick_count = frame.ticks.len();
        self.last_legend_count = frame.legend.len();
        Ok(())
    }
}
