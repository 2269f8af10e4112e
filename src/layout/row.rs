//! Row accumulation: wrap each mapped cell and cost the row.

use crate::capacity::CapacityProfile;
use crate::error::{Error, Result};
use crate::model::{ColumnSpec, Row};
use crate::options::UnmappedFieldPolicy;

use super::{wrap_cell, WrappedCell};

/// A row after wrapping, ready for pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatedRow {
    /// Wrapped cells in schema order, one per column present in the row
    pub cells: Vec<WrappedCell>,

    /// Line count of the tallest cell (at least 1)
    pub line_count: usize,

    /// `line_count` scaled by the profile's wrapped-line weight
    pub weighted_cost: f64,
}

/// Wrap a row's cells and compute its weighted cost.
///
/// Cells render side by side, so the row is as tall as its tallest cell.
/// Columns the row has no field for are omitted.
pub fn accumulate_row(
    row: &Row,
    columns: &[ColumnSpec],
    profile: &CapacityProfile,
) -> Result<AccumulatedRow> {
    if columns.is_empty() {
        return Err(Error::InvalidArgument(
            "column schema is empty".to_string(),
        ));
    }

    let mut cells = Vec::with_capacity(columns.len());
    let mut line_count = 1;
    for column in columns {
        if let Some(text) = row.get(&column.data_key) {
            let cell = wrap_cell(text, column.wrap_width)?;
            line_count = line_count.max(cell.line_count());
            cells.push(cell);
        }
    }

    Ok(AccumulatedRow {
        cells,
        line_count,
        weighted_cost: line_count as f64 * profile.wrapped_line_weight,
    })
}

/// Enforce `policy` on the mapping between a row's fields and the schema.
///
/// `index` is the zero-based row position used in error messages.
pub fn check_row_fields(
    index: usize,
    row: &Row,
    columns: &[ColumnSpec],
    policy: UnmappedFieldPolicy,
) -> Result<()> {
    if policy == UnmappedFieldPolicy::Skip {
        return Ok(());
    }

    if let Some(field) = row
        .keys()
        .find(|key| !columns.iter().any(|c| c.data_key == *key))
    {
        return Err(Error::UnmappedField {
            row: index,
            field: field.to_string(),
        });
    }

    if let Some(column) = columns.iter().find(|c| !row.contains(&c.data_key)) {
        return Err(Error::MissingField {
            row: index,
            column: column.data_key.clone(),
        });
    }

    Ok(())
}
