//! The training table: named columns over string-typed rows.
//!
//! A [`Table`] is the thin container the learner trains from. Column order
//! matters: the **last column is always the label** and every preceding
//! column is a feature. Cells are plain strings; whether a column behaves
//! numerically is decided per comparison by [`Question`](crate::Question),
//! not by the table.
//!
//! The container itself is deliberately open (public fields, no invariants
//! enforced at construction). Validation happens once, when the table is
//! handed to [`DecisionTree::train`](crate::DecisionTree::train).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered set of named columns plus rows of string cells.
///
/// # Example
/// ```
/// use ginitree::Table;
///
/// let table = Table::from_str_rows(
///     &["Color", "Diameter", "Label"],
///     &[
///         &["Green", "3", "Apple"],
///         &["Red", "1", "Grape"],
///     ],
/// );
/// assert_eq!(table.feature_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in order. The last one is the label column.
    pub columns: Vec<String>,
    /// Rows of cells, each aligned to `columns`.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        Table { columns, rows }
    }

    /// Convenience constructor from borrowed strings, handy for literals.
    pub fn from_str_rows(columns: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Number of feature columns (all columns except the trailing label).
    pub fn feature_count(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// Label occurrence counts over the given row subset, in first-seen
    /// row order. The insertion order is load-bearing: it drives the
    /// deterministic tie-break when a leaf has equally frequent labels.
    pub(crate) fn label_counts(&self, indices: &[usize]) -> IndexMap<String, u32> {
        let label_col = self.columns.len() - 1;
        let mut counts = IndexMap::new();

        for &i in indices {
            *counts.entry(self.rows[i][label_col].clone()).or_insert(0) += 1;
        }

        counts
    }
}
