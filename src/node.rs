//! Arena-stored tree nodes.
//!
//! Nodes live in a flat `Vec` owned by the tree and reference their children
//! by [`NodeId`] index instead of nested `Box` pointers. That keeps both
//! training and classification iteration-friendly (no recursion, no stack
//! growth on deep trees) and leaves the door open for serializing the whole
//! arena as a plain sequence.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::question::Question;

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Placeholder for a child slot not yet patched during building.
    /// Never present in a finished tree.
    pub(crate) const PENDING: NodeId = NodeId(u32::MAX);

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node of a trained tree: either a decision point or a terminal
/// label-count distribution.
///
/// A node is exactly one variant; an internal node never carries counts and
/// a leaf never carries a question. Both children of an internal node are
/// valid arena indices in every finished tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Decision point: rows matching `question` descend into `yes`, the
    /// rest into `no`.
    Internal {
        question: Question,
        yes: NodeId,
        no: NodeId,
    },
    /// Terminal node holding label -> occurrence counts of the training
    /// rows that reached it, in first-reached order. Non-empty in every
    /// finished tree.
    Leaf { counts: IndexMap<String, u32> },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
