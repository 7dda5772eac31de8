use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GanttError, GanttResult};

/// Tag marking the rows this tool cares about; everything else is skipped.
pub const TASK_DEBUG_TAG: &str = "taskdebug";

const WORKER_ID_FIELD: usize = 1;
const START_US_FIELD: usize = 2;
const END_US_FIELD: usize = 3;
const LABEL_FIELD: usize = 5;
const MIN_FIELD_COUNT: usize = 6;

/// One task execution interval on one logical worker.
///
/// `end_us >= start_us` is expected but not enforced: a negative-width
/// interval surfaces visually as a degenerate bar rather than a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEvent {
    pub worker_id: i64,
    pub start_us: i64,
    pub end_us: i64,
    pub label: String,
}

/// Parse output: events in file order plus the distinct labels seen,
/// in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTrace {
    pub events: Vec<TaskEvent>,
    pub labels: IndexSet<String>,
}

/// Reads a comma-separated trace stream into a [`ParsedTrace`].
///
/// Rows whose first field is not [`TASK_DEBUG_TAG`] are discarded. A tagged
/// row that is too short or carries non-integer numeric fields fails the
/// whole run; there is no partial-result recovery.
pub fn parse_trace<R: Read>(reader: R) -> GanttResult<ParsedTrace> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut trace = ParsedTrace::default();
    let mut record = csv::StringRecord::new();
    let mut row_count: u64 = 0;

    while csv_reader.read_record(&mut record)? {
        row_count += 1;
        if record.is_empty() || record.get(0) != Some(TASK_DEBUG_TAG) {
            continue;
        }
        let line = record.position().map_or(row_count, csv::Position::line);
        let event = decode_task_record(&record, line)?;
        trace.labels.insert(event.label.clone());
        trace.events.push(event);
    }

    debug!(
        rows = row_count,
        events = trace.events.len(),
        labels = trace.labels.len(),
        "parsed trace"
    );
    Ok(trace)
}

/// Opens `path` and parses it with [`parse_trace`].
pub fn parse_trace_path(path: impl AsRef<Path>) -> GanttResult<ParsedTrace> {
    let file = File::open(path.as_ref())?;
    parse_trace(file)
}

fn decode_task_record(record: &csv::StringRecord, line: u64) -> GanttResult<TaskEvent> {
    if record.len() < MIN_FIELD_COUNT {
        return Err(GanttError::MalformedRecord {
            line,
            reason: format!(
                "expected at least {MIN_FIELD_COUNT} fields, found {}",
                record.len()
            ),
        });
    }

    Ok(TaskEvent {
        worker_id: parse_integer_field(record, WORKER_ID_FIELD, "worker id", line)?,
        start_us: parse_integer_field(record, START_US_FIELD, "start timestamp", line)?,
        end_us: parse_integer_field(record, END_US_FIELD, "end timestamp", line)?,
        label: record.get(LABEL_FIELD).unwrap_or_default().to_owned(),
    })
}

fn parse_integer_field(
    record: &csv::StringRecord,
    index: usize,
    field_name: &str,
    line: u64,
) -> GanttResult<i64> {
    let raw = record.get(index).unwrap_or_default();
    raw.trim().parse::<i64>().map_err(|_| GanttError::MalformedRecord {
        line,
        reason: format!("field `{field_name}` is not an integer: `{raw}`"),
    })
}
