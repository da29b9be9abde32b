//! The split predicate shared by training and inference.
//!
//! A [`Question`] is a single column/value comparison. The same predicate is
//! used in both directions: the split search asks it of training rows to
//! partition them, and the classifier asks it of a query record to pick a
//! branch. Keeping one implementation guarantees the two can never disagree.
//!
//! # Matching semantics
//!
//! The comparison rule depends on whether the stored value parses as a
//! number (standard `f64` syntax):
//!
//! - **Numeric**: the match is `cell >= value`, both parsed as `f64`. This
//!   makes numeric splits behave as thresholds.
//! - **Categorical**: the match is exact string equality, partitioning the
//!   column into one value versus everything else.
//!
//! In a column whose cells are inconsistently numeric, a numeric question
//! falls back to string equality for each cell that fails to parse. That
//! per-cell fallback is documented behavior, not an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable column/value test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Name of the column this question examines.
    pub column: String,
    /// The comparison value, kept in its original string form.
    pub value: String,
}

/// Parse a cell as a number, if it is one.
fn numeric(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}

impl Question {
    pub fn new(column: &str, value: &str) -> Question {
        Question {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Evaluate this question against a single cell.
    pub fn matches(&self, cell: &str) -> bool {
        match (numeric(&self.value), numeric(cell)) {
            (Some(threshold), Some(v)) => v >= threshold,
            _ => cell == self.value,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if numeric(&self.value).is_some() {
            write!(f, "{} >= {}?", self.column, self.value)
        } else {
            write!(f, "{} == {}?", self.column, self.value)
        }
    }
}
