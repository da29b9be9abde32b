//! The trained model: tree induction, traversal, and answer aggregation.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{QueryError, TrainError};
use crate::node::{Node, NodeId};
use crate::split;
use crate::table::Table;

/// A classification result: the predicted label and how dominant that label
/// was in the leaf the query reached, as a whole percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub label: String,
    /// `0..=100`. Exactly `100` when the leaf held a single label.
    pub confidence: u8,
}

/// Which child slot a freshly built node belongs in.
enum Slot {
    Root,
    Yes(usize),
    No(usize),
}

/// An immutable binary decision tree induced from a [`Table`].
///
/// Built once by [`DecisionTree::train`] and never mutated afterwards, so
/// answering queries from multiple threads needs no locking. Nodes are held
/// in a flat arena indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    columns: Vec<String>,
    nodes: Vec<Node>,
    root: NodeId,
}

impl DecisionTree {
    /// Induce a tree from a training table by greedy Gini splitting.
    ///
    /// The table is validated up front: it must carry at least one feature
    /// column plus the trailing label column, unique column names, at least
    /// one row, and rectangular rows. Anything else is a [`TrainError`].
    ///
    /// Building walks an explicit work stack of row subsets instead of
    /// recursing, so arbitrarily deep trees cannot exhaust the call stack.
    /// A subset whose best split gains nothing becomes a leaf carrying the
    /// subset's label counts; otherwise the winning question partitions the
    /// subset and both sides are queued.
    pub fn train(table: &Table) -> Result<DecisionTree, TrainError> {
        if table.columns.len() < 2 {
            return Err(TrainError::NotEnoughColumns(table.columns.len()));
        }
        for (i, column) in table.columns.iter().enumerate() {
            if table.columns[..i].contains(column) {
                return Err(TrainError::DuplicateColumn(column.clone()));
            }
        }
        if table.rows.is_empty() {
            return Err(TrainError::EmptyTable);
        }
        for (i, row) in table.rows.iter().enumerate() {
            if row.len() != table.columns.len() {
                return Err(TrainError::RaggedRow {
                    row: i,
                    expected: table.columns.len(),
                    got: row.len(),
                });
            }
        }

        let mut nodes: Vec<Node> = Vec::new();
        let mut root = NodeId::PENDING;
        let mut stack = vec![((0..table.rows.len()).collect::<Vec<_>>(), Slot::Root)];

        while let Some((rows, slot)) = stack.pop() {
            let (gain, question) = split::find_best_split(table, &rows);
            let id = NodeId(nodes.len() as u32);

            match question {
                Some(question) if gain > 0.0 => {
                    let (yes_rows, no_rows) = split::partition(table, &rows, &question);
                    nodes.push(Node::Internal {
                        question,
                        yes: NodeId::PENDING,
                        no: NodeId::PENDING,
                    });
                    stack.push((no_rows, Slot::No(id.index())));
                    stack.push((yes_rows, Slot::Yes(id.index())));
                }
                // No split beats zero gain: the subset is pure, or nothing
                // separates it. Terminal either way.
                _ => nodes.push(Node::Leaf {
                    counts: table.label_counts(&rows),
                }),
            }

            match slot {
                Slot::Root => root = id,
                Slot::Yes(parent) => {
                    if let Node::Internal { yes, .. } = &mut nodes[parent] {
                        *yes = id;
                    }
                }
                Slot::No(parent) => {
                    if let Node::Internal { no, .. } = &mut nodes[parent] {
                        *no = id;
                    }
                }
            }
        }

        let tree = DecisionTree {
            columns: table.columns.clone(),
            nodes,
            root,
        };

        debug!(
            rows = table.rows.len(),
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            "trained decision tree"
        );
        trace!(tree = %tree.dump(), "tree structure");

        Ok(tree)
    }

    /// Answer a query record, a `column name -> value` mapping supplying
    /// exactly the feature columns.
    ///
    /// Validation short-circuits in order: every key must be a trained
    /// column name, and the record must carry exactly
    /// [`feature_count`](Self::feature_count) entries. Rejected records are
    /// logged at `warn` level and surfaced as a [`QueryError`]; they never
    /// panic and never touch the tree.
    ///
    /// When the reached leaf holds several labels, the most frequent one
    /// wins and confidence is `floor(100 * top / total)`. Equally frequent
    /// top labels resolve to the label first seen at that leaf during
    /// training.
    pub fn answer(&self, record: &HashMap<String, String>) -> Result<Answer, QueryError> {
        for key in record.keys() {
            if !self.columns.contains(key) {
                warn!(key = %key, "rejecting record with unknown column");
                return Err(QueryError::UnknownColumn(key.clone()));
            }
        }

        let expected = self.feature_count();
        if record.len() != expected {
            warn!(
                expected,
                got = record.len(),
                "rejecting record with wrong feature count"
            );
            return Err(QueryError::FeatureCountMismatch {
                expected,
                got: record.len(),
            });
        }

        let counts = self.classify(record)?;
        let total: u32 = counts.values().sum();

        let mut ranked: Vec<(&String, u32)> =
            counts.iter().map(|(label, &c)| (label, c)).collect();
        // Stable sort: equal counts keep first-reached order, which is what
        // makes the tie-break deterministic.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let Some(&(label, top)) = ranked.first() else {
            warn!("rejecting record that reached an empty leaf");
            return Err(QueryError::EmptyLeaf);
        };

        let confidence = if ranked.len() == 1 {
            100
        } else {
            (u64::from(top) * 100 / u64::from(total)) as u8
        };

        Ok(Answer {
            label: label.clone(),
            confidence,
        })
    }

    /// Descend from the root to the leaf this record falls into, yielding
    /// the leaf's label-count distribution.
    fn classify(&self, record: &HashMap<String, String>) -> Result<&IndexMap<String, u32>, QueryError> {
        let mut id = self.root;
        loop {
            match &self.nodes[id.index()] {
                Node::Leaf { counts } => return Ok(counts),
                Node::Internal { question, yes, no } => {
                    let cell = record.get(&question.column).ok_or_else(|| {
                        warn!(column = %question.column, "record lacks a column the tree asks about");
                        QueryError::MissingColumn(question.column.clone())
                    })?;
                    id = if question.matches(cell) { *yes } else { *no };
                }
            }
        }
    }

    /// Column names the tree was trained with, label column last.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of feature columns a query record must supply.
    pub fn feature_count(&self) -> usize {
        self.columns.len() - 1
    }

    /// Total node count, internal nodes and leaves.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Leaf count.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Longest root-to-leaf path, counted in questions asked. A tree that
    /// is a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            match &self.nodes[id.index()] {
                Node::Leaf { .. } => max = max.max(depth),
                Node::Internal { yes, no, .. } => {
                    stack.push((*yes, depth + 1));
                    stack.push((*no, depth + 1));
                }
            }
        }

        max
    }

    /// Human-readable rendering of the tree, one node per line.
    ///
    /// Internal nodes print their question, leaves their label counts.
    /// Intended for diagnostics; the format is not stable.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<(NodeId, usize, &str)> = vec![(self.root, 0, "")];

        while let Some((id, depth, tag)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match &self.nodes[id.index()] {
                Node::Leaf { counts } => {
                    let dist = counts
                        .iter()
                        .map(|(label, c)| format!("{label}: {c}"))
                        .collect::<Vec<_>>()
                        .join(", ");
                    out.push_str(&format!("{indent}{tag}{{ {dist} }}\n"));
                }
                Node::Internal { question, yes, no } => {
                    out.push_str(&format!("{indent}{tag}{question}\n"));
                    stack.push((*no, depth + 1, "no: "));
                    stack.push((*yes, depth + 1, "yes: "));
                }
            }
        }

        out
    }
}
