//! Table generation: validation, accumulation and pagination.

use log::debug;

use crate::error::{Error, Result};
use crate::layout::{accumulate_row, check_row_fields, Pager};
use crate::model::{ColumnSpec, Header, Row, TableDocument};
use crate::options::GenerateOptions;

/// Paginate rows into a table document with `options`.
pub fn generate(
    columns: &[ColumnSpec],
    rows: &[Row],
    options: &GenerateOptions,
) -> Result<TableDocument> {
    TableGenerator::new(options.clone()).generate(columns, rows)
}

/// Builds [`TableDocument`]s from a schema and rows.
pub struct TableGenerator {
    options: GenerateOptions,
}

impl TableGenerator {
    /// Create a new generator.
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate a paginated document.
    ///
    /// All validation (schema, capacity lookup, field policy) runs before any
    /// row is paginated, so a failure never yields a partial document.
    pub fn generate(&self, columns: &[ColumnSpec], rows: &[Row]) -> Result<TableDocument> {
        validate_columns(columns)?;

        let profile = self
            .options
            .capacity
            .resolve(self.options.font_size, self.options.orientation)?;

        for (index, row) in rows.iter().enumerate() {
            check_row_fields(index, row, columns, self.options.unmapped_fields)?;
        }

        let mut pager = Pager::new(&profile);
        for row in rows {
            pager.push(accumulate_row(row, columns, &profile)?);
        }
        let blocks = pager.finish();

        debug!(
            "generated '{}': {} row(s), {} block(s), {} {}",
            self.options.title,
            rows.len(),
            blocks.len(),
            self.options.font_size,
            self.options.orientation
        );

        Ok(TableDocument {
            title: self.options.title.clone(),
            font_size: self.options.font_size,
            orientation: self.options.orientation,
            profile,
            columns: columns.to_vec(),
            header: Header::from_columns(columns),
            blocks,
            styles: self.options.styles.clone(),
        })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }
}

fn validate_columns(columns: &[ColumnSpec]) -> Result<()> {
    if columns.is_empty() {
        return Err(Error::InvalidArgument(
            "no table header information supplied".to_string(),
        ));
    }
    if let Some(column) = columns.iter().find(|c| c.wrap_width == 0) {
        return Err(Error::InvalidArgument(format!(
            "column '{}' has a non-positive wrap width",
            column.name
        )));
    }
    Ok(())
}
