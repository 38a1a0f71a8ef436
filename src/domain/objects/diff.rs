use derive_new::new;
use std::fmt::Display;

use crate::domain::objects::SYNC_WINDOW;
use crate::domain::objects::line::Sequence;

/// Half-open range of 1-indexed line numbers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The 0-indexed sequence positions covered by this range.
    pub fn indexes(&self) -> std::ops::Range<usize> {
        self.start - 1..self.end - 1
    }
}

impl Display for LineRange {
    /// Ed-style descriptor: `start,last`, collapsed to `start` when the
    /// range holds a single line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last = self.end - 1;
        if self.start == last {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{},{}", self.start, last)
        }
    }
}

/// One contiguous divergent region between the two sequences. A `point` is a
/// 1-indexed anchor in the other sequence's numbering; 0 means "before the
/// first line".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Change { a: LineRange, b: LineRange },
    Delete { a: LineRange, b_point: usize },
    Insert { a_point: usize, b: LineRange },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonResult {
    Identical,
    Edits(Vec<EditOp>),
}

/// Greedy bounded-lookahead synchronizer.
///
/// Walks both sequences in lock-step and, on divergence, scans a forward
/// window of at most `window` lines in each sequence (outer loop over A,
/// inner over B) taking the FIRST pair of equal keys as the
/// resynchronization point. This is deliberately not an optimal LCS or
/// edit-distance computation: the bounded window keeps the cost at
/// O(n * window^2), at the price of occasionally emitting a larger change
/// script or mis-synchronizing on short repeated lines inside the window.
/// That tradeoff is part of the observable contract and must not be
/// replaced by a globally optimal algorithm.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SyncDiff<'d> {
    a: &'d Sequence,
    b: &'d Sequence,
    #[new(value = "SYNC_WINDOW")]
    window: usize,
}

impl<'d> SyncDiff<'d> {
    pub fn with_window(a: &'d Sequence, b: &'d Sequence, window: usize) -> Self {
        SyncDiff { a, b, window }
    }

    pub fn synchronize(&self) -> ComparisonResult {
        let (n, m) = (self.a.len(), self.b.len());
        let (mut i, mut j) = (0, 0);
        let mut edits = Vec::new();

        while i < n || j < m {
            if i < n && j < m && self.a.line(i).key() == self.b.line(j).key() {
                i += 1;
                j += 1;
                continue;
            }

            // Divergence at (i, j); if no resync point exists within the
            // window, the rest of both sequences is one divergent region.
            let (sync_i, sync_j) = self.resync(i, j).unwrap_or((n, m));

            let a_range = LineRange::new(i + 1, sync_i + 1);
            let b_range = LineRange::new(j + 1, sync_j + 1);

            let edit = if !a_range.is_empty() && !b_range.is_empty() {
                EditOp::Change {
                    a: a_range,
                    b: b_range,
                }
            } else if !a_range.is_empty() {
                EditOp::Delete {
                    a: a_range,
                    b_point: j,
                }
            } else {
                EditOp::Insert {
                    a_point: i,
                    b: b_range,
                }
            };
            edits.push(edit);

            (i, j) = (sync_i, sync_j);
        }

        if edits.is_empty() {
            ComparisonResult::Identical
        } else {
            ComparisonResult::Edits(edits)
        }
    }

    // First pair of equal keys within the forward window, scanned row-major
    // (increasing A offset outer, increasing B offset inner). First match
    // wins, never the pair with the smallest gap.
    fn resync(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        for look_i in i..(i + self.window).min(self.a.len()) {
            for look_j in j..(j + self.window).min(self.b.len()) {
                if self.a.line(look_i).key() == self.b.line(look_j).key() {
                    return Some((look_i, look_j));
                }
            }
        }

        None
    }
}
