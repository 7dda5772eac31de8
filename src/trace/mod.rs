mod identity;
mod parser;

pub use identity::{IDENTITY_FIELD_COUNT, TaskIdentity};
pub use parser::{ParsedTrace, TASK_DEBUG_TAG, TaskEvent, parse_trace, parse_trace_path};
