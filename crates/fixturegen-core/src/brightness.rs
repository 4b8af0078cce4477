//! Brightness matrices: rectangular grids of pixel-intensity values.

use serde::{Deserialize, Serialize};

use crate::rng::FixtureRng;

/// A grid of brightness values in [0, 255], stored row-major.
///
/// Serializes as a bare nested array (`[[row0...], [row1...], ...]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrightnessMatrix {
    rows: Vec<Vec<u8>>,
}

impl BrightnessMatrix {
    /// Fill a `width` x `height` matrix with uniformly distributed values.
    pub fn random(width: usize, height: usize, rng: &mut FixtureRng) -> Self {
        let rows = (0..height)
            .map(|_| (0..width).map(|_| rng.gen_brightness()).collect())
            .collect();
        Self { rows }
    }

    /// Build a matrix from explicit rows.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self { rows })
    }

    /// Number of values per row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Value at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Appends the printed-list form (`[[1, 2], [3, 4]]`) to `out`.
    pub(crate) fn write_literal(&self, out: &mut String) {
        out.push('[');
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('[');
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    out.push_str(", ");
                }
                out.push_str(&value.to_string());
            }
            out.push(']');
        }
        out.push(']');
    }
}
