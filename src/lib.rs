//! A binary decision tree classifier induced from labeled tabular data.
//!
//! # Overview
//!
//! GiniTree grows a CART-style tree from a [`Table`] of string-typed rows by
//! greedy recursive partitioning:
//! - **Gini-driven splits**: each node takes the column/value question with
//!   the highest information gain
//! - **Mixed column kinds**: numeric values split as `>=` thresholds,
//!   everything else as exact-equality partitions, decided per comparison
//! - **Confidence scoring**: a query descends to a leaf and returns the
//!   dominant label plus its share of the leaf as a whole percentage
//! - **Iterative core**: training and classification run on explicit work
//!   stacks over an index arena, so deep trees cannot overflow the call stack
//! - **Strict boundaries**: degenerate tables and malformed query records are
//!   rejected with typed errors, never panics
//!
//! The trained tree is immutable: once [`DecisionTree::train`] returns,
//! nothing mutates a node again, so answering queries concurrently from many
//! threads needs no locking.
//!
//! # Quick start
//!
//! ```rust
//! use ginitree::{DecisionTree, Table};
//! use std::collections::HashMap;
//!
//! // 1. Lay out training data. The last column is always the label.
//! let table = Table::from_str_rows(
//!     &["Color", "Diameter", "Label"],
//!     &[
//!         &["Green", "3", "Apple"],
//!         &["Yellow", "3", "Apple"],
//!         &["Red", "1", "Grape"],
//!         &["Red", "1", "Grape"],
//!         &["Yellow", "3", "Lemon"],
//!     ],
//! );
//!
//! // 2. Induce the tree.
//! let tree = DecisionTree::train(&table).unwrap();
//!
//! // 3. Classify a record supplying exactly the feature columns.
//! let mut record = HashMap::new();
//! record.insert("Color".to_string(), "Red".to_string());
//! record.insert("Diameter".to_string(), "1".to_string());
//!
//! let answer = tree.answer(&record).unwrap();
//! assert_eq!(answer.label, "Grape");
//! assert_eq!(answer.confidence, 100); // the Grape leaf is pure
//! ```
//!
//! # Diagnostics
//!
//! The crate logs through [`tracing`]: a `debug!` summary after training, a
//! `trace!` dump of the full tree, and `warn!` events for every rejected
//! query. Install whatever subscriber fits the host application; without one
//! the core stays silent and fully functional.
//!
//! # Determinism
//!
//! Trees and answers are reproducible for a given table: split candidates
//! are examined feature column by feature column and per column in
//! first-seen value order, with gain ties going to the later candidate;
//! equally frequent labels in a leaf resolve to the label first reached
//! during training.
//!
//! # See also
//!
//! - [`DecisionTree`]: training and querying
//! - [`Table`]: the training data container
//! - [`Question`]: the shared split/routing predicate
//! - [`TrainError`] / [`QueryError`]: what gets rejected and why

mod error;
mod node;
mod question;
mod split;
mod table;
mod tree;

pub use error::*;
pub use node::*;
pub use question::*;
pub use table::*;
pub use tree::*;
