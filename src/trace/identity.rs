use smallvec::SmallVec;

use crate::error::{GanttError, GanttResult};

/// Number of `;`-delimited fields in a task identity label.
pub const IDENTITY_FIELD_COUNT: usize = 7;

const SOURCE_FILE: usize = 1;
const FUNCTION: usize = 2;
const LINE: usize = 3;
const COLUMN: usize = 4;
const END_MARKER: usize = 6;

/// Structured view of one composite task identity label.
///
/// Labels encode where a task was defined and how it terminated:
/// `[blank, source_file, function, line, column, blank, end_marker]`.
/// All seven fields are kept verbatim, blanks included, so `reassemble`
/// reproduces the original label exactly. The raw label string stays the
/// canonical identity key; this type only exists to read its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIdentity {
    parts: [String; IDENTITY_FIELD_COUNT],
}

impl TaskIdentity {
    /// Splits a label on `;` into exactly [`IDENTITY_FIELD_COUNT`] fields.
    pub fn decode(label: &str) -> GanttResult<Self> {
        let split: SmallVec<[&str; IDENTITY_FIELD_COUNT]> = label.split(';').collect();
        if split.len() != IDENTITY_FIELD_COUNT {
            return Err(GanttError::MalformedIdentity {
                label: label.to_owned(),
                parts: split.len(),
            });
        }
        Ok(Self {
            parts: std::array::from_fn(|index| split[index].to_owned()),
        })
    }

    #[must_use]
    pub fn source_file(&self) -> &str {
        &self.parts[SOURCE_FILE]
    }

    #[must_use]
    pub fn function(&self) -> &str {
        &self.parts[FUNCTION]
    }

    #[must_use]
    pub fn line(&self) -> &str {
        &self.parts[LINE]
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.parts[COLUMN]
    }

    #[must_use]
    pub fn end_marker(&self) -> &str {
        &self.parts[END_MARKER]
    }

    /// Parses the line field as a base-10 integer.
    ///
    /// Only the continuous color policy needs this; identity equality works
    /// on the raw strings.
    pub fn line_number(&self) -> GanttResult<i64> {
        parse_numeric_field(self.line(), "line")
    }

    /// Parses the end-marker field as a base-10 integer.
    pub fn end_marker_value(&self) -> GanttResult<i64> {
        parse_numeric_field(self.end_marker(), "end marker")
    }

    /// False iff both line and column are the literal `0`, meaning the
    /// scheduler had no source location for the task.
    #[must_use]
    pub fn has_source_location(&self) -> bool {
        !(self.line() == "0" && self.column() == "0")
    }

    /// Re-joins the seven fields; must reproduce the decoded label
    /// byte-for-byte.
    #[must_use]
    pub fn reassemble(&self) -> String {
        self.parts.join(";")
    }
}

fn parse_numeric_field(raw: &str, field_name: &str) -> GanttResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        GanttError::InvalidData(format!(
            "identity field `{field_name}` is not an integer: `{raw}`"
        ))
    })
}
