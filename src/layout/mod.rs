//! Table layout: cell wrapping, row costing and page breaking.
//!
//! Data flows leaves first: [`wrap_cell`] per cell, [`accumulate_row`] per
//! row, then [`Pager`] across all rows to produce page blocks.

mod pager;
mod row;
mod wrap;

pub use pager::{paginate_rows, PageDecision, Pager, COST_EPSILON};
pub use row::{accumulate_row, check_row_fields, AccumulatedRow};
pub use wrap::{wrap_cell, WrappedCell};
