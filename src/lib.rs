//! # Balanced Timing-Accuracy Index for Periodic Message Logs
//!
//! This library indexes a set of periodic message streams, each
//! identified by an integer message ID with an expected transmission
//! period and a sequence of observed arrival timestamps, and answers
//! timing-accuracy queries against the index.
//!
//! ## Core Algorithm
//!
//! 1. **Median-split construction**: Sort the ID set ascending and
//!    recursively pick the element at `n / 2` as the subtree root,
//!    yielding a balanced BST of depth O(log N) in a single pass.
//! 2. **Ordered lookup**: Standard BST descent; a miss is a value
//!    (`None`), never a failure.
//! 3. **Timing metrics**: Per-stream gap deviations
//!    (`t[i+1] - t[i] - period`), mean-absolute accuracy scores,
//!    frequencies, and tree-wide reports and rankings.
//!
//! The tree is built once from two ID-keyed mappings and is immutable
//! thereafter; all queries are pure reads.
//!
//! ## Usage Example
//!
//! ```
//! use logtree::LogTree;
//! use std::collections::BTreeMap;
//!
//! let periods = BTreeMap::from([(1, 100), (2, 200)]);
//! let timestamps = BTreeMap::from([
//!     (1, vec![0.0, 100.0, 200.0]),
//!     (2, vec![0.0, 205.0]),
//! ]);
//!
//! let tree = LogTree::build(Some(periods), Some(timestamps))?;
//! assert!(tree.contains(1));
//! assert_eq!(tree.accuracy(1), Some(0.0));
//! assert_eq!(tree.accuracy(2), Some(5.0));
//! # Ok::<(), logtree::IndexError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one component of the index
pub mod tree;   // Balanced message-ID index
pub mod stats;  // Tree-wide aggregation and reports
pub mod ingest; // Delimited-text readers for the two input sources
pub mod report; // Delimited-text report sink

// Re-exports for convenience
pub use ingest::import_files;
pub use stats::StreamStats;
pub use tree::{LogTree, StreamNode};

use std::collections::BTreeMap;

use thiserror::Error;

/// Expected inter-message interval in milliseconds, keyed by message ID.
pub type PeriodMap = BTreeMap<u32, u32>;

/// Ordered observed arrival times, keyed by message ID.
pub type TimestampMap = BTreeMap<u32, Vec<f64>>;

/// Errors that can occur while constructing the index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Exactly one of the two construction inputs was supplied
    #[error("period and timestamp inputs must either both be present or both be absent")]
    PartialInput,

    /// The two inputs disagree on which message IDs exist
    #[error("mismatched message IDs: {} missing from periods, {} missing from timestamps",
            format_ids(.missing_periods), format_ids(.missing_timestamps))]
    KeyMismatch {
        /// IDs present in the timestamp input but not the period input
        missing_periods: Vec<u32>,
        /// IDs present in the period input but not the timestamp input
        missing_timestamps: Vec<u32>,
    },
}

fn format_ids(ids: &[u32]) -> String {
    if ids.is_empty() {
        "none".to_string()
    } else {
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
