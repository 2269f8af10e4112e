//! Paginated output types.

use crate::capacity::{CapacityProfile, FontSizeClass, Orientation};
use crate::layout::AccumulatedRow;

use super::{ColumnSpec, Header};

/// One table fragment destined for one physical page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageBlock {
    /// Rows in document order
    pub rows: Vec<AccumulatedRow>,

    /// Sum of the rows' weighted costs
    pub cost: f64,
}

impl PageBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, row: AccumulatedRow) {
        self.cost += row.weighted_cost;
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the block holds more than `profile` allows.
    ///
    /// Only a block holding a single oversized row can overflow.
    pub fn overflows(&self, profile: &CapacityProfile) -> bool {
        self.cost > profile.capacity() + crate::layout::COST_EPSILON
    }
}

/// A fully paginated table.
#[derive(Debug, Clone)]
pub struct TableDocument {
    /// Document title
    pub title: String,

    /// Font size class the capacity was resolved for
    pub font_size: FontSizeClass,

    /// Page orientation the capacity was resolved for
    pub orientation: Orientation,

    /// Capacity profile used for pagination
    pub profile: CapacityProfile,

    /// Column schema
    pub columns: Vec<ColumnSpec>,

    /// Header shared by every block
    pub header: Header,

    /// Page blocks in order, at least one
    pub blocks: Vec<PageBlock>,

    /// Extra style rules appended after the base rules
    pub styles: Vec<String>,
}

impl TableDocument {
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total rows across all blocks.
    pub fn row_count(&self) -> usize {
        self.blocks.iter().map(PageBlock::row_count).sum()
    }

    /// Serialize to the final HTML markup.
    pub fn to_html(&self) -> String {
        crate::markup::assemble_document(self)
    }
}
