//! tracegantt: per-worker Gantt-style timelines from task scheduler debug
//! traces.
//!
//! The pipeline is a strict chain of immutable artifacts: CSV records are
//! parsed into task events, events are grouped into ordered per-worker rows,
//! distinct task identities get deterministic colors, and the chart builder
//! emits a backend-agnostic draw-command frame. Rendering backends plug in
//! through [`render::Renderer`].

pub mod api;
pub mod chart;
pub mod color;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod timeline;
pub mod trace;

pub use api::{TimelineChart, TimelineChartConfig};
pub use error::{GanttError, GanttResult};
