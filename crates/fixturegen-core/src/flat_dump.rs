//! Flat brightness dump: a stack of large matrices written as a printed
//! list literal rather than JSON.

use serde::{Deserialize, Serialize};

use crate::brightness::BrightnessMatrix;
use crate::rng::FixtureRng;

/// Parameters for [`generate_flat_dump`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatDumpParams {
    /// Number of stacked matrices.
    pub count: usize,
    pub width: usize,
    pub height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for FlatDumpParams {
    fn default() -> Self {
        Self {
            count: 5,
            width: 256,
            height: 256,
            seed: None,
        }
    }
}

/// An ordered stack of brightness matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDump {
    pub matrices: Vec<BrightnessMatrix>,
}

impl FlatDump {
    /// Render as `[[[v, v, ...], ...], ...]`.
    ///
    /// This is not JSON-compatible in general use and is consumed as plain text.
    pub fn to_literal(&self) -> String {
        let cells: usize = self
            .matrices
            .iter()
            .map(|m| m.width() * m.height())
            .sum();
        // Up to three digits plus ", " per cell
        let mut out = String::with_capacity(cells * 5 + 2);
        out.push('[');
        for (i, matrix) in self.matrices.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            matrix.write_literal(&mut out);
        }
        out.push(']');
        out
    }
}

/// Generate `count` independent matrices.
pub fn generate_flat_dump(params: &FlatDumpParams) -> FlatDump {
    let mut rng = FixtureRng::from_optional_seed(params.seed);
    let matrices = (0..params.count)
        .map(|_| BrightnessMatrix::random(params.width, params.height, &mut rng))
        .collect();
    FlatDump { matrices }
}
