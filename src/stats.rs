//! Tree-wide aggregation over the built index
//!
//! Every operation here is a pure read: one in-order walk collects
//! the per-stream metrics, so a full report costs O(N + total
//! timestamps) rather than one BST descent per stream.

use std::collections::BTreeMap;

use crate::tree::{LogTree, StreamNode};

/// Summary row for one indexed stream
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamStats {
    /// Message ID
    pub message_id: u32,
    /// Expected inter-message interval (milliseconds)
    pub period: u32,
    /// Number of recorded timestamps
    pub frequency: usize,
    /// Mean absolute gap deviation
    pub accuracy: f64,
}

impl StreamStats {
    fn of(node: &StreamNode) -> Self {
        Self {
            message_id: node.message_id(),
            period: node.period(),
            frequency: node.frequency(),
            accuracy: node.accuracy(),
        }
    }

    /// Summary rows for every stream in the tree, ascending by ID
    pub fn collect(tree: &LogTree) -> Vec<StreamStats> {
        tree.iter().map(StreamStats::of).collect()
    }
}

impl LogTree {
    /// Accuracy score for every stream in the tree
    pub fn accuracy_report(&self) -> BTreeMap<u32, f64> {
        self.iter()
            .map(|node| (node.message_id(), node.accuracy()))
            .collect()
    }

    /// Timestamp count for every stream in the tree
    pub fn all_frequencies(&self) -> BTreeMap<u32, usize> {
        self.iter()
            .map(|node| (node.message_id(), node.frequency()))
            .collect()
    }

    /// All message IDs ascending by accuracy score, most accurate first
    ///
    /// Ties are broken by ascending ID, so the order is a total one
    /// and streams sharing a score are all retained.
    pub fn sorted_by_accuracy(&self) -> Vec<u32> {
        let mut scored: Vec<(f64, u32)> = self
            .iter()
            .map(|node| (node.accuracy(), node.message_id()))
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, id)| id).collect()
    }
}
