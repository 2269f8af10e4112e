//! Page breaking across rows.
//!
//! The pager keeps one open block and decides per row, using only the row's
//! own cost and the block's running cost, whether to append, append and
//! close, or close first. No look-ahead is needed, so rows can be pushed as
//! they arrive.

use log::{debug, trace, warn};

use crate::capacity::CapacityProfile;
use crate::model::PageBlock;

use super::AccumulatedRow;

/// Tolerance for comparing accumulated fractional costs against capacity.
pub const COST_EPSILON: f64 = 1e-9;

/// What the pager did with a pushed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDecision {
    /// Row appended; block stays open.
    Append,
    /// Row appended and filled the block exactly; block closed.
    AppendAndBreak,
    /// Row did not fit; open block closed and row starts a new one.
    BreakBefore,
}

/// Streaming page breaker.
#[derive(Debug)]
pub struct Pager {
    capacity: f64,
    blocks: Vec<PageBlock>,
    current: PageBlock,
}

impl Pager {
    /// Create a pager with one empty open block.
    pub fn new(profile: &CapacityProfile) -> Self {
        Self {
            capacity: profile.capacity(),
            blocks: Vec::new(),
            current: PageBlock::new(),
        }
    }

    /// Place one row.
    pub fn push(&mut self, row: AccumulatedRow) -> PageDecision {
        let cost = row.weighted_cost;
        let projected = self.current.cost + cost;

        let decision = if (projected - self.capacity).abs() <= COST_EPSILON {
            self.current.push(row);
            self.close_current();
            PageDecision::AppendAndBreak
        } else if projected > self.capacity {
            self.close_current();
            if cost > self.capacity + COST_EPSILON {
                warn!(
                    "row cost {:.2} exceeds page capacity {}; placing it on its own page",
                    cost, self.capacity
                );
            }
            self.current.push(row);
            PageDecision::BreakBefore
        } else {
            self.current.push(row);
            PageDecision::Append
        };

        trace!(
            "row cost {:.2}: {:?} (block {}, cost {:.2})",
            cost,
            decision,
            self.blocks.len(),
            self.current.cost
        );
        decision
    }

    /// Number of blocks closed so far.
    pub fn closed_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Close the open block, even if empty, and return all blocks.
    pub fn finish(mut self) -> Vec<PageBlock> {
        self.blocks.push(self.current);
        debug!(
            "paginated into {} block(s) at capacity {}",
            self.blocks.len(),
            self.capacity
        );
        self.blocks
    }

    fn close_current(&mut self) {
        let block = std::mem::take(&mut self.current);
        debug!(
            "closing block {} with {} row(s), cost {:.2}",
            self.blocks.len(),
            block.rows.len(),
            block.cost
        );
        self.blocks.push(block);
    }
}

/// Paginate already accumulated rows in order.
pub fn paginate_rows<I>(rows: I, profile: &CapacityProfile) -> Vec<PageBlock>
where
    I: IntoIterator<Item = AccumulatedRow>,
{
    let mut pager = Pager::new(profile);
    for row in rows {
        pager.push(row);
    }
    pager.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::WrappedCell;

    fn row(lines: usize, weight: f64) -> AccumulatedRow {
        AccumulatedRow {
            cells: vec![WrappedCell {
                lines: vec![String::new(); lines],
            }],
            line_count: lines,
            weighted_cost: lines as f64 * weight,
        }
    }

    fn profile(rows_per_page: u32, weight: f64) -> CapacityProfile {
        CapacityProfile::new(rows_per_page, weight).unwrap()
    }

    fn sizes(blocks: &[PageBlock]) -> Vec<usize> {
        blocks.iter().map(|b| b.rows.len()).collect()
    }

    #[test]
    fn test_exact_fill_breaks_immediately() {
        let p = profile(2, 1.0);
        let blocks = paginate_rows(vec![row(1, 1.0), row(1, 1.0), row(1, 1.0)], &p);
        assert_eq!(sizes(&blocks), vec![2, 1]);
        assert_eq!(blocks[0].cost, 2.0);
        assert_eq!(blocks[1].cost, 1.0);
    }

    #[test]
    fn test_exact_fill_on_last_row_leaves_trailing_empty_block() {
        let p = profile(2, 1.0);
        let blocks = paginate_rows(vec![row(1, 1.0), row(1, 1.0)], &p);
        assert_eq!(sizes(&blocks), vec![2, 0]);
    }

    #[test]
    fn test_overflow_breaks_before_row() {
        let p = profile(3, 1.0);
        let mut pager = Pager::new(&p);
        assert_eq!(pager.push(row(2, 1.0)), PageDecision::Append);
        assert_eq!(pager.push(row(2, 1.0)), PageDecision::BreakBefore);
        assert_eq!(pager.closed_blocks(), 1);
        assert_eq!(pager.push(row(1, 1.0)), PageDecision::AppendAndBreak);
        let blocks = pager.finish();
        assert_eq!(sizes(&blocks), vec![1, 2, 0]);
        assert_eq!(blocks[1].cost, 3.0);
    }

    #[test]
    fn test_oversized_row_gets_own_block() {
        let p = profile(3, 1.0);
        let blocks = paginate_rows(vec![row(5, 1.0)], &p);
        let holder: Vec<_> = blocks.iter().filter(|b| !b.rows.is_empty()).collect();
        assert_eq!(holder.len(), 1);
        assert_eq!(holder[0].rows.len(), 1);
        assert_eq!(holder[0].cost, 5.0);
    }

    #[test]
    fn test_oversized_row_between_others() {
        let p = profile(3, 1.0);
        let blocks = paginate_rows(vec![row(1, 1.0), row(5, 1.0), row(1, 1.0)], &p);
        // The oversized row's block is closed by the next row overflowing it.
        assert_eq!(sizes(&blocks), vec![1, 1, 1]);
        assert_eq!(blocks[1].cost, 5.0);
    }

    #[test]
    fn test_no_rows_yields_single_empty_block() {
        let blocks = paginate_rows(Vec::new(), &profile(10, 1.0));
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].rows.is_empty());
        assert_eq!(blocks[0].cost, 0.0);
    }

    #[test]
    fn test_fractional_weight_exact_fill() {
        // Ten rows of 0.9 reach 9.0 only through accumulated rounding.
        let p = profile(9, 0.9);
        let rows = (0..11).map(|_| row(1, 0.9));
        let blocks = paginate_rows(rows, &p);
        assert_eq!(sizes(&blocks), vec![10, 1]);
    }

    #[test]
    fn test_capacity_bound_and_conservation() {
        let p = profile(7, 0.9);
        let lines = [1, 3, 2, 9, 1, 1, 4, 2, 2, 1, 5, 1, 1, 1, 3];
        let rows: Vec<_> = lines.iter().map(|&n| row(n, 0.9)).collect();
        let blocks = paginate_rows(rows, &p);

        let total: usize = blocks.iter().map(|b| b.rows.len()).sum();
        assert_eq!(total, lines.len());

        for block in &blocks {
            if block.rows.len() > 1 {
                assert!(block.cost <= 7.0 + COST_EPSILON);
            }
        }
    }
}
