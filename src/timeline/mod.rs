use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::trace::TaskEvent;

/// Row granularity for timeline partitioning.
///
/// `Coarse` gives one row per worker; `Fine` additionally separates each
/// worker's distinct task labels onto fractional sub-rows so overlapping
/// tasks on one worker stay visually distinguishable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Coarse,
    #[default]
    Fine,
}

/// Tuning for fine-granularity sub-row layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupingTuning {
    /// Divisor applied on top of the distinct-label count when spacing
    /// sub-rows. Larger values pack sub-rows tighter; the default of 4 keeps
    /// every offset well inside its integer worker row.
    pub sub_row_compression: f64,
}

impl Default for GroupingTuning {
    fn default() -> Self {
        Self {
            sub_row_compression: 4.0,
        }
    }
}

/// Sort key and partition key in one value.
///
/// Worker id is the outermost component, so a stable sort on `RowKey` can
/// never split one worker across non-adjacent runs, whatever the label
/// ordering does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey<'a> {
    pub worker_id: i64,
    /// `None` under coarse granularity, the task label under fine.
    pub label: Option<&'a str>,
}

/// One maximal run of equal-key events, placed on an integer worker row
/// plus an optional fractional sub-row offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineGroup<'a> {
    pub key: RowKey<'a>,
    pub row_index: usize,
    pub sub_row_offset: f64,
    pub events: Vec<&'a TaskEvent>,
}

/// Ordered row groups for one trace, borrowing the parsed events.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<'a> {
    granularity: Granularity,
    groups: Vec<TimelineGroup<'a>>,
    worker_rows: Vec<i64>,
    sub_row_step: f64,
}

impl<'a> Timeline<'a> {
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn groups(&self) -> &[TimelineGroup<'a>] {
        &self.groups
    }

    /// Distinct worker ids in ascending order; position = row index.
    #[must_use]
    pub fn worker_rows(&self) -> &[i64] {
        &self.worker_rows
    }

    /// Vertical distance between adjacent fine-granularity sub-rows, in row
    /// units. Zero when the trace is empty.
    #[must_use]
    pub fn sub_row_step(&self) -> f64 {
        self.sub_row_step
    }

    /// One `(row, text)` tick per distinct worker, independent of how many
    /// label sub-rows sit under it.
    #[must_use]
    pub fn tick_labels(&self) -> Vec<(usize, String)> {
        self.worker_rows
            .iter()
            .enumerate()
            .map(|(row, worker_id)| (row, worker_id.to_string()))
            .collect()
    }
}

/// Sorts and partitions events into ordered per-row groups.
///
/// Events are stable-sorted by [`RowKey`] (ties keep parse order) and split
/// into maximal equal-key runs, so the partition key and the sort key cannot
/// drift apart. `row_index` ranks the group's worker id among all distinct
/// worker ids, not the run's ordinal: under fine granularity several label
/// runs of one worker share the integer row and differ only in
/// `sub_row_offset`, computed as `label_rank * sub_row_step` over the
/// lexicographically sorted distinct labels.
#[must_use]
pub fn group_events<'a>(
    events: &'a [TaskEvent],
    granularity: Granularity,
    tuning: GroupingTuning,
) -> Timeline<'a> {
    let mut ordered: Vec<&TaskEvent> = events.iter().collect();
    ordered.sort_by(|a, b| row_key(a, granularity).cmp(&row_key(b, granularity)));

    let mut worker_rows: Vec<i64> = events.iter().map(|event| event.worker_id).collect();
    worker_rows.sort_unstable();
    worker_rows.dedup();

    let mut labels: Vec<&str> = events.iter().map(|event| event.label.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();

    let sub_row_step = if labels.is_empty() {
        0.0
    } else {
        1.0 / (labels.len() as f64 * tuning.sub_row_compression)
    };

    let mut groups = Vec::new();
    let mut start = 0;
    while start < ordered.len() {
        let key = row_key(ordered[start], granularity);
        let mut end = start + 1;
        while end < ordered.len() && row_key(ordered[end], granularity) == key {
            end += 1;
        }

        let row_index = worker_rows
            .binary_search(&key.worker_id)
            .unwrap_or_default();
        let sub_row_offset = match key.label {
            Some(label) => {
                let rank = labels.binary_search(&label).unwrap_or_default();
                rank as f64 * sub_row_step
            }
            None => 0.0,
        };

        groups.push(TimelineGroup {
            key,
            row_index,
            sub_row_offset,
            events: ordered[start..end].to_vec(),
        });
        start = end;
    }

    debug!(
        events = events.len(),
        groups = groups.len(),
        workers = worker_rows.len(),
        ?granularity,
        "grouped timeline"
    );

    Timeline {
        granularity,
        groups,
        worker_rows,
        sub_row_step,
    }
}

fn row_key(event: &TaskEvent, granularity: Granularity) -> RowKey<'_> {
    RowKey {
        worker_id: event.worker_id,
        label: match granularity {
            Granularity::Coarse => None,
            Granularity::Fine => Some(event.label.as_str()),
        },
    }
}
