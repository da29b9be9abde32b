//! Error types for training and querying.
//!
//! Training and querying fail in different ways and are kept as separate
//! enums: a [`TrainError`] means the caller handed us a table we refuse to
//! learn from, while a [`QueryError`] means a single query was malformed and
//! was rejected at the boundary. Queries never abort the process and never
//! poison the tree; the caller simply gets the variant describing what was
//! wrong with that one record.

use thiserror::Error;

/// Rejections raised while validating a training table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainError {
    /// The table has no rows at all.
    #[error("training table has no rows")]
    EmptyTable,

    /// The table needs at least one feature column plus the label column.
    #[error("training table needs at least one feature column plus the label column, got {0} column(s)")]
    NotEnoughColumns(usize),

    /// Two columns share the same name.
    #[error("duplicate column name `{0}`")]
    DuplicateColumn(String),

    /// A row's cell count does not match the column count.
    #[error("row {row} has {got} cell(s) but the table has {expected} column(s)")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Rejections raised while validating or answering a single query record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The record carries a key that is not one of the trained columns.
    #[error("record key `{0}` is not a trained column")]
    UnknownColumn(String),

    /// The record must supply exactly the feature columns, no more, no fewer.
    #[error("record must supply exactly {expected} feature value(s), got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    /// Tree descent needed a column the record did not supply.
    #[error("record is missing a value for column `{0}`")]
    MissingColumn(String),

    /// The reached leaf carries no label counts. Cannot happen for a tree
    /// trained from a validated table; checked anyway.
    #[error("reached a leaf with an empty label distribution")]
    EmptyLeaf,
}
