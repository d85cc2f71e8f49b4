//! One indexed message stream
//!
//! A node owns a single stream's metadata (ID, expected period,
//! observed timestamps) together with its two subtrees, and answers
//! the per-stream timing metrics directly.

use super::LogTree;

/// A single message stream and its two owned subtrees
///
/// Every ID strictly less than `message_id` lives in `left`; every ID
/// strictly greater lives in `right`.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamNode {
    /// Message ID, unique across the whole tree
    message_id: u32,

    /// Expected inter-message interval (milliseconds)
    period: u32,

    /// Observed arrival times, non-decreasing; may be empty
    timestamps: Vec<f64>,

    /// Subtree of smaller IDs
    left: LogTree,

    /// Subtree of larger IDs
    right: LogTree,
}

impl StreamNode {
    pub(super) fn new(
        message_id: u32,
        period: u32,
        timestamps: Vec<f64>,
        left: LogTree,
        right: LogTree,
    ) -> Self {
        Self {
            message_id,
            period,
            timestamps,
            left,
            right,
        }
    }

    /// This stream's message ID
    #[inline]
    pub fn message_id(&self) -> u32 {
        self.message_id
    }

    /// Expected inter-message interval (milliseconds)
    #[inline]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Observed arrival times, in recording order
    #[inline]
    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Subtree holding all smaller IDs
    #[inline]
    pub fn left(&self) -> &LogTree {
        &self.left
    }

    /// Subtree holding all larger IDs
    #[inline]
    pub fn right(&self) -> &LogTree {
        &self.right
    }

    /// Number of recorded timestamps for this stream
    #[inline]
    pub fn frequency(&self) -> usize {
        self.timestamps.len()
    }

    /// Signed deviation of each observed inter-arrival gap from the
    /// expected period: `t[i+1] - t[i] - period`
    ///
    /// A stream with fewer than two timestamps has no observable gap
    /// and yields an empty vector.
    pub fn gaps(&self) -> Vec<f64> {
        let period = f64::from(self.period);
        self.timestamps
            .windows(2)
            .map(|pair| pair[1] - pair[0] - period)
            .collect()
    }

    /// Mean absolute gap deviation; lower means timing adheres more
    /// closely to the expected period
    ///
    /// Defined as `0.0` for streams with fewer than two timestamps
    /// (the mean over zero observed gaps).
    pub fn accuracy(&self) -> f64 {
        let gaps = self.gaps();
        if gaps.is_empty() {
            return 0.0;
        }
        gaps.iter().map(|gap| gap.abs()).sum::<f64>() / gaps.len() as f64
    }
}
