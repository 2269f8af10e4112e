//! Table model types.
//!
//! Inputs ([`ColumnSpec`], [`Row`], [`TableSource`]) are caller-supplied and
//! immutable once generation starts. Outputs ([`PageBlock`],
//! [`TableDocument`]) are produced by the pager and never mutated afterwards.

mod column;
mod document;
mod row;

pub use column::{ColumnSpec, Header};
pub use document::{PageBlock, TableDocument};
pub use row::{Row, TableSource};
