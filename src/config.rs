//! Options for [`compute_diff`](crate::compute_diff).

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table size above which [`Algorithm::Auto`] stops using the LCS table.
/// At four bytes a cell this caps the table at 64 MiB.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 16_000_000;

/// Alignment algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// LCS while the table fits in `max_table_cells`, Myers beyond that.
    #[default]
    Auto,
    /// Dynamic-programming LCS with backtracking. O(n * m) time and space.
    Lcs,
    /// Myers' O(ND) algorithm in linear space. Suits inputs too large for
    /// the table.
    Myers,
}

impl Algorithm {
    /// Picks the concrete algorithm for inputs of `n` and `m` lines.
    pub fn resolve(self, n: usize, m: usize, max_table_cells: usize) -> Algorithm {
        match self {
            Algorithm::Auto => {
                let cells = n.saturating_add(1).saturating_mul(m.saturating_add(1));
                if cells <= max_table_cells {
                    Algorithm::Lcs
                } else {
                    tracing::debug!(
                        cells,
                        max_table_cells,
                        "LCS table over limit, aligning with Myers"
                    );
                    Algorithm::Myers
                }
            }
            concrete => concrete,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Auto => "auto",
            Algorithm::Lcs => "lcs",
            Algorithm::Myers => "myers",
        })
    }
}

impl FromStr for Algorithm {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Algorithm::Auto),
            "lcs" => Ok(Algorithm::Lcs),
            "myers" => Ok(Algorithm::Myers),
            _ => Err(OptionsError::UnknownValue {
                option: "algorithm",
                value: s.to_string(),
                expected: "auto, lcs, myers",
            }),
        }
    }
}

/// How the presenter escapes line text for its host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escape {
    #[default]
    None,
    Html,
}

impl FromStr for Escape {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Escape::None),
            "html" => Ok(Escape::Html),
            _ => Err(OptionsError::UnknownValue {
                option: "escape",
                value: s.to_string(),
                expected: "none, html",
            }),
        }
    }
}

/// Options for a diff run. Missing fields take their defaults when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    /// Unchanged lines shown around each change. 0 shows only changes.
    pub context_lines: usize,
    pub algorithm: Algorithm,
    /// Input-size guard for [`Algorithm::Auto`].
    pub max_table_cells: usize,
    pub escape: Escape,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            context_lines: 0,
            algorithm: Algorithm::Auto,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            escape: Escape::None,
        }
    }
}

impl DiffOptions {
    pub fn with_context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    /// Parses a (possibly partial) JSON options document, e.g.
    /// `{"contextLines": 1}`.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }
}
