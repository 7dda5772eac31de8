use std::hash::{DefaultHasher, Hash, Hasher};

use indexmap::{IndexMap, IndexSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GanttError, GanttResult};
use crate::render::Color;
use crate::trace::TaskIdentity;

/// Label → fill color map. Iteration order is the assignment order
/// (lexicographic over labels) and drives legend order.
pub type ColorAssignment = IndexMap<String, Color>;

/// Behavior when distinct labels outnumber the discrete palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteOverflow {
    /// Fail with [`GanttError::PaletteExhausted`].
    Fail,
    /// Reuse palette entries modulo palette length.
    Wrap,
}

/// Tuning for the continuous color policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorTuning {
    /// Compresses normalized ranks toward the channel midpoint before they
    /// become RGB values. `1.0` (the default) leaves ranks untouched; values
    /// in `(0, 1)` reduce contrast between identities.
    pub contrast_compression: f64,
}

impl Default for ColorTuning {
    fn default() -> Self {
        Self {
            contrast_compression: 1.0,
        }
    }
}

/// Rank used for an axis with a single distinct value, where
/// `index / (len - 1)` would divide by zero.
pub const SINGLETON_AXIS_RANK: f64 = 0.1;

const fn srgb(red: u8, green: u8, blue: u8) -> Color {
    Color::rgb(
        red as f64 / 255.0,
        green as f64 / 255.0,
        blue as f64 / 255.0,
    )
}

/// Fixed discrete palette: the ten Tableau hues.
pub const DISCRETE_PALETTE: [Color; 10] = [
    srgb(0x1f, 0x77, 0xb4),
    srgb(0xff, 0x7f, 0x0e),
    srgb(0x2c, 0xa0, 0x2c),
    srgb(0xd6, 0x27, 0x28),
    srgb(0x94, 0x67, 0xbd),
    srgb(0x8c, 0x56, 0x4b),
    srgb(0xe3, 0x77, 0xc2),
    srgb(0x7f, 0x7f, 0x7f),
    srgb(0xbc, 0xbd, 0x22),
    srgb(0x17, 0xbe, 0xcf),
];

/// Assigns palette colors to labels in lexicographic order.
///
/// `overflow` decides what happens past the palette length; silence is not
/// an option.
pub fn assign_discrete(
    labels: &IndexSet<String>,
    overflow: PaletteOverflow,
) -> GanttResult<ColorAssignment> {
    if overflow == PaletteOverflow::Fail && labels.len() > DISCRETE_PALETTE.len() {
        return Err(GanttError::PaletteExhausted {
            distinct: labels.len(),
            palette_len: DISCRETE_PALETTE.len(),
        });
    }

    let mut assignment = ColorAssignment::with_capacity(labels.len());
    for (rank, label) in sorted_labels(labels).into_iter().enumerate() {
        assignment.insert(
            label.to_owned(),
            DISCRETE_PALETTE[rank % DISCRETE_PALETTE.len()],
        );
    }

    debug!(labels = assignment.len(), "assigned discrete palette colors");
    Ok(assignment)
}

/// Derives one RGB color per label from its identity features.
///
/// Each decoded identity contributes `(function, line, end_marker)` to three
/// sorted deduplicated axes; its normalized rank on each axis becomes the R,
/// G and B channel (alpha fixed at 1.0). Identities without a source
/// location (`line == "0" && column == "0"`) skip the formula and draw a
/// color from an RNG seeded with a stable hash of the label, so repeated
/// runs still agree.
pub fn assign_continuous(
    labels: &IndexSet<String>,
    tuning: ColorTuning,
) -> GanttResult<ColorAssignment> {
    if !tuning.contrast_compression.is_finite()
        || !(0.0..=1.0).contains(&tuning.contrast_compression)
        || tuning.contrast_compression == 0.0
    {
        return Err(GanttError::InvalidData(
            "contrast compression must be finite and in (0, 1]".to_owned(),
        ));
    }

    let ordered = sorted_labels(labels);
    let mut identities = Vec::with_capacity(ordered.len());
    for label in &ordered {
        identities.push(TaskIdentity::decode(label)?);
    }

    let mut functions: Vec<&str> = Vec::with_capacity(identities.len());
    let mut lines: Vec<i64> = Vec::with_capacity(identities.len());
    let mut markers: Vec<i64> = Vec::with_capacity(identities.len());
    for identity in &identities {
        functions.push(identity.function());
        lines.push(identity.line_number()?);
        markers.push(identity.end_marker_value()?);
    }
    functions.sort_unstable();
    functions.dedup();
    lines.sort_unstable();
    lines.dedup();
    markers.sort_unstable();
    markers.dedup();

    let mut fallbacks = 0usize;
    let mut assignment = ColorAssignment::with_capacity(ordered.len());
    for (label, identity) in ordered.iter().zip(&identities) {
        let color = if identity.has_source_location() {
            let red = axis_rank(&functions, &identity.function());
            let green = axis_rank(&lines, &identity.line_number()?);
            let blue = axis_rank(&markers, &identity.end_marker_value()?);
            Color::rgb(
                compress(red, tuning.contrast_compression),
                compress(green, tuning.contrast_compression),
                compress(blue, tuning.contrast_compression),
            )
        } else {
            fallbacks += 1;
            fallback_color(label)
        };
        assignment.insert((*label).to_owned(), color);
    }

    debug!(
        labels = assignment.len(),
        fallbacks, "assigned continuous feature colors"
    );
    Ok(assignment)
}

/// Color for identities lacking a source location.
///
/// Seeded from a stable hash of the label: not derived from the rank
/// formula, but identical across runs for the same label.
#[must_use]
pub fn fallback_color(label: &str) -> Color {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());
    Color::rgb(rng.random(), rng.random(), rng.random())
}

fn sorted_labels(labels: &IndexSet<String>) -> Vec<&str> {
    let mut ordered: Vec<&str> = labels.iter().map(String::as_str).collect();
    ordered.sort_unstable();
    ordered
}

/// Position of `value` within the sorted deduplicated axis, normalized into
/// `[0, 1]`. A singleton axis yields [`SINGLETON_AXIS_RANK`].
fn axis_rank<T: Ord>(axis: &[T], value: &T) -> f64 {
    if axis.len() <= 1 {
        return SINGLETON_AXIS_RANK;
    }
    let index = axis.binary_search(value).unwrap_or_default();
    index as f64 / (axis.len() - 1) as f64
}

fn compress(rank: f64, compression: f64) -> f64 {
    if compression == 1.0 {
        return rank;
    }
    (0.5 + (rank - 0.5) * compression).clamp(0.0, 1.0)
}
