//! Balanced message-ID index
//!
//! Construction is a recursive median split over the ID set sorted
//! ascending: with `n` entries, the element at index `n / 2` becomes
//! the node, indices `[0, n/2)` build the left subtree and
//! `(n/2, n)` the right.
//!
//! The split guarantees depth O(log N), not merely BST ordering, and
//! is deterministic: the same input mappings always produce the same
//! shape. Built once, the tree is immutable; there is no insert or
//! delete.

mod node;
mod traversal;

pub use node::StreamNode;
pub use traversal::Iter;

use std::fmt;

use tracing::debug;

use crate::{IndexError, PeriodMap, TimestampMap};

/// Balanced binary search index over periodic message streams
///
/// `Empty` doubles as the base case of construction and the
/// "not found" terminal of traversal; it carries no data and is never
/// queried for a period or timestamps.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTree {
    /// The empty sentinel: no stream, no children
    Empty,

    /// An occupied subtree rooted at one stream
    Node(Box<StreamNode>),
}

/// One stream's worth of construction input: `(id, period, timestamps)`.
type Entry = (u32, u32, Vec<f64>);

impl LogTree {
    /// Build the index from the two input mappings
    ///
    /// Both absent yields the valid empty tree. Exactly one absent is
    /// rejected as [`IndexError::PartialInput`]; the two key sets
    /// disagreeing is rejected as [`IndexError::KeyMismatch`]. No
    /// partial tree is ever returned.
    pub fn build(
        periods: Option<PeriodMap>,
        timestamps: Option<TimestampMap>,
    ) -> Result<Self, IndexError> {
        let (periods, mut timestamps) = match (periods, timestamps) {
            (None, None) => return Ok(LogTree::Empty),
            (Some(periods), Some(timestamps)) => (periods, timestamps),
            _ => return Err(IndexError::PartialInput),
        };

        let missing_periods: Vec<u32> = timestamps
            .keys()
            .filter(|id| !periods.contains_key(id))
            .copied()
            .collect();
        let missing_timestamps: Vec<u32> = periods
            .keys()
            .filter(|id| !timestamps.contains_key(id))
            .copied()
            .collect();
        if !missing_periods.is_empty() || !missing_timestamps.is_empty() {
            return Err(IndexError::KeyMismatch {
                missing_periods,
                missing_timestamps,
            });
        }

        let mut entries: Vec<Entry> = periods
            .into_iter()
            .map(|(id, period)| {
                let observed = timestamps.remove(&id).unwrap_or_default();
                (id, period, observed)
            })
            .collect();
        // Construction must not depend on the mapping's iteration order
        entries.sort_unstable_by_key(|&(id, _, _)| id);

        debug!(streams = entries.len(), "building message index");
        Ok(Self::from_sorted(entries))
    }

    /// Recursive median split over ID-ascending entries
    fn from_sorted(mut entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            return LogTree::Empty;
        }

        let mid = entries.len() / 2;
        let right = Self::from_sorted(entries.split_off(mid + 1));
        // After split_off the median is the last entry of the lower half
        let (message_id, period, timestamps) = entries.pop().unwrap();
        let left = Self::from_sorted(entries);

        LogTree::Node(Box::new(StreamNode::new(
            message_id, period, timestamps, left, right,
        )))
    }

    /// Whether this is the empty sentinel
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, LogTree::Empty)
    }

    /// The root stream, or `None` for the empty tree
    #[inline]
    pub fn root(&self) -> Option<&StreamNode> {
        match self {
            LogTree::Empty => None,
            LogTree::Node(node) => Some(node),
        }
    }

    /// Number of streams in the tree
    pub fn len(&self) -> usize {
        match self {
            LogTree::Empty => 0,
            LogTree::Node(node) => 1 + node.left().len() + node.right().len(),
        }
    }

    /// Height of the tree; the empty tree has depth 0
    pub fn depth(&self) -> usize {
        match self {
            LogTree::Empty => 0,
            LogTree::Node(node) => 1 + node.left().depth().max(node.right().depth()),
        }
    }

    /// Expected period for `message_id`, or `None` if not indexed
    pub fn period(&self, message_id: u32) -> Option<u32> {
        self.find(message_id).map(StreamNode::period)
    }

    /// Observed timestamps for `message_id`, or `None` if not indexed
    pub fn timestamps(&self, message_id: u32) -> Option<&[f64]> {
        self.find(message_id).map(StreamNode::timestamps)
    }

    /// Gap deviations for `message_id`, or `None` if not indexed
    ///
    /// See [`StreamNode::gaps`] for the per-pair formula and the
    /// fewer-than-two-timestamps behavior.
    pub fn gaps(&self, message_id: u32) -> Option<Vec<f64>> {
        self.find(message_id).map(StreamNode::gaps)
    }

    /// Accuracy score for `message_id`, or `None` if not indexed
    ///
    /// See [`StreamNode::accuracy`] for the degenerate-stream policy.
    pub fn accuracy(&self, message_id: u32) -> Option<f64> {
        self.find(message_id).map(StreamNode::accuracy)
    }

    /// Timestamp count for `message_id`, or `None` if not indexed
    pub fn frequency(&self, message_id: u32) -> Option<usize> {
        self.find(message_id).map(StreamNode::frequency)
    }
}

impl Default for LogTree {
    fn default() -> Self {
        LogTree::Empty
    }
}

impl fmt::Display for LogTree {
    /// Indented rendering: one line per stream ID, children one
    /// `:   ` level deeper than their parent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

impl LogTree {
    fn render(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if let LogTree::Node(node) = self {
            writeln!(f, "{}{}", ":   ".repeat(depth), node.message_id())?;
            node.left().render(f, depth + 1)?;
            node.right().render(f, depth + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn maps(ids: &[u32]) -> (PeriodMap, TimestampMap) {
        let periods = ids.iter().map(|&id| (id, 100)).collect();
        let timestamps = ids.iter().map(|&id| (id, Vec::new())).collect();
        (periods, timestamps)
    }

    #[test]
    fn test_both_absent_is_empty_tree() {
        let tree = LogTree::build(None, None).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_partial_input_rejected() {
        let (periods, timestamps) = maps(&[1]);
        assert_eq!(
            LogTree::build(Some(periods), None),
            Err(IndexError::PartialInput)
        );
        assert_eq!(
            LogTree::build(None, Some(timestamps)),
            Err(IndexError::PartialInput)
        );
    }

    #[test]
    fn test_key_mismatch_rejected() {
        let periods = BTreeMap::from([(1, 100), (2, 200)]);
        let timestamps = BTreeMap::from([(1, vec![]), (3, vec![])]);
        let err = LogTree::build(Some(periods), Some(timestamps)).unwrap_err();
        assert_eq!(
            err,
            IndexError::KeyMismatch {
                missing_periods: vec![3],
                missing_timestamps: vec![2],
            }
        );
    }

    #[test]
    fn test_two_streams_root_is_larger_id() {
        // n = 2 picks index 1 as the node: larger ID on top, smaller
        // ID as the left child, right child empty
        let (periods, timestamps) = maps(&[10, 20]);
        let tree = LogTree::build(Some(periods), Some(timestamps)).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(root.message_id(), 20);
        assert_eq!(root.left().root().unwrap().message_id(), 10);
        assert!(root.right().is_empty());
    }

    #[test]
    fn test_display_indents_by_depth() {
        let (periods, timestamps) = maps(&[1, 2, 3]);
        let tree = LogTree::build(Some(periods), Some(timestamps)).unwrap();
        assert_eq!(tree.to_string(), "2\n:   1\n:   3\n");
    }
}
