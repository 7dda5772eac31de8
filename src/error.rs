use thiserror::Error;

pub type GanttResult<T> = Result<T, GanttError>;

#[derive(Debug, Error)]
pub enum GanttError {
    #[error("failed to read trace input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode trace records: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed taskdebug record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("malformed task identity `{label}`: expected 7 `;`-delimited fields, found {parts}")]
    MalformedIdentity { label: String, parts: usize },

    #[error("palette exhausted: {distinct} distinct labels exceed palette of {palette_len}")]
    PaletteExhausted { distinct: usize, palette_len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
