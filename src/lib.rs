//! # pagetab
//!
//! Paginate long tables into HTML for renderers that only understand forced
//! page breaks.
//!
//! Renderers such as wkhtmltopdf cannot repeat a table header on every
//! printed page, and they cannot report how many rows fit on one. pagetab
//! estimates row heights from word-wrapped cell text, breaks the table into
//! page-sized blocks, and repeats the header at the top of each block.
//!
//! ## Quick Start
//!
//! ```
//! use pagetab::{ColumnSpec, GenerateOptions, Row};
//!
//! fn main() -> pagetab::Result<()> {
//!     let columns = vec![
//!         ColumnSpec::new("Name", "name", 15),
//!         ColumnSpec::new("Notes", "notes", 20),
//!     ];
//!     let rows = vec![Row::new().with("name", "Alice").with("notes", "First entry")];
//!
//!     let options = GenerateOptions::new().with_title("People");
//!     let html = pagetab::to_html_with_options(&columns, &rows, &options)?;
//!     assert!(html.contains("<th>Name</th>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Word-preserving wrap estimation**: per-column character widths
//! - **Row costing**: the tallest cell sets the row height
//! - **Local page breaking**: no look-ahead, order preserving
//! - **Injectable capacity tables**: calibrate other fonts via JSON
//! - **Renderer layer**: wkhtmltopdf invocation with scoped temp files

pub mod capacity;
pub mod error;
pub mod generator;
pub mod layout;
pub mod markup;
pub mod model;
pub mod options;
pub mod renderer;
pub mod report;

// Re-export commonly used types
pub use capacity::{
    resolve_capacity, CapacityEntry, CapacityProfile, CapacityTable, FontSizeClass, Orientation,
};
pub use error::{Error, Result};
pub use generator::{generate, TableGenerator};
pub use layout::{accumulate_row, wrap_cell, AccumulatedRow, PageDecision, Pager, WrappedCell};
pub use markup::{assemble, base_styles, wrap_static};
pub use model::{ColumnSpec, Header, PageBlock, Row, TableDocument, TableSource};
pub use options::{GenerateOptions, UnmappedFieldPolicy};
pub use renderer::{DocumentRenderer, RenderJob, RenderSource, WkhtmltopdfRenderer};
pub use report::{JsonFormat, PaginationReport};

use std::path::Path;

/// Paginate rows with default options.
///
/// # Example
///
/// ```
/// use pagetab::{paginate, ColumnSpec, Row};
///
/// let columns = vec![ColumnSpec::new("Age", "age", 5)];
/// let rows: Vec<Row> = (1..=3).map(|i| Row::new().with("age", i)).collect();
/// let doc = paginate(&columns, &rows).unwrap();
/// assert_eq!(doc.row_count(), 3);
/// ```
pub fn paginate(columns: &[ColumnSpec], rows: &[Row]) -> Result<TableDocument> {
    generate(columns, rows, &GenerateOptions::default())
}

/// Paginate rows and serialize the result to HTML with default options.
pub fn to_html(columns: &[ColumnSpec], rows: &[Row]) -> Result<String> {
    Ok(paginate(columns, rows)?.to_html())
}

/// Paginate rows and serialize the result to HTML.
pub fn to_html_with_options(
    columns: &[ColumnSpec],
    rows: &[Row],
    options: &GenerateOptions,
) -> Result<String> {
    Ok(generate(columns, rows, options)?.to_html())
}

/// Builder for paginating a table and handing it to a renderer.
///
/// # Example
///
/// ```
/// use pagetab::{ColumnSpec, FontSizeClass, Orientation, Pagetab, Row};
///
/// let html = Pagetab::new()
///     .title("Inventory")
///     .font_size(FontSizeClass::Medium)
///     .orientation(Orientation::Landscape)
///     .style("td { color: #333; }")
///     .generate(&[ColumnSpec::new("Item", "item", 20)], &[Row::new().with("item", "Bolt")])?
///     .to_html();
/// assert!(html.contains("Bolt"));
/// # Ok::<(), pagetab::Error>(())
/// ```
pub struct Pagetab {
    options: GenerateOptions,
}

impl Pagetab {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: GenerateOptions::default(),
        }
    }

    /// Set the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.with_title(title);
        self
    }

    /// Set the font size class.
    pub fn font_size(mut self, font_size: FontSizeClass) -> Self {
        self.options = self.options.with_font_size(font_size);
        self
    }

    /// Set the page orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.options = self.options.with_orientation(orientation);
        self
    }

    /// Append a style rule.
    pub fn style(mut self, rule: impl Into<String>) -> Self {
        self.options = self.options.with_style(rule);
        self
    }

    /// Reject unmapped fields and missing cells.
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict();
        self
    }

    /// Use a custom capacity table.
    pub fn capacity_table(mut self, table: CapacityTable) -> Self {
        self.options = self.options.with_capacity_table(table);
        self
    }

    /// Paginate a table.
    pub fn generate(&self, columns: &[ColumnSpec], rows: &[Row]) -> Result<TableDocument> {
        generate(columns, rows, &self.options)
    }

    /// Paginate a decoded table source; its title overrides the builder's.
    pub fn generate_source(&self, source: &TableSource) -> Result<TableDocument> {
        let mut options = self.options.clone();
        if let Some(title) = &source.title {
            options.title = title.clone();
        }
        generate(&source.columns, &source.rows, &options)
    }

    /// Paginate and render to `output`.
    ///
    /// Pagination errors are returned before the renderer is started.
    pub fn render<R: DocumentRenderer + ?Sized>(
        &self,
        renderer: &R,
        columns: &[ColumnSpec],
        rows: &[Row],
        output: impl AsRef<Path>,
    ) -> Result<TableDocument> {
        let doc = self.generate(columns, rows)?;
        renderer.render_document(&doc, output.as_ref())?;
        Ok(doc)
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }
}

impl Default for Pagetab {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingRenderer {
        calls: AtomicUsize,
    }

    impl DocumentRenderer for CountingRenderer {
        fn name(&self) -> &str {
            "counting"
        }

        fn render(&self, _source: RenderSource<'_>, _job: &RenderJob, _output: &Path) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_builder_options() {
        let builder = Pagetab::new()
            .title("T")
            .font_size(FontSizeClass::Large)
            .orientation(Orientation::Landscape)
            .style("a{}")
            .strict();

        let options = builder.options();
        assert_eq!(options.title, "T");
        assert_eq!(options.font_size, FontSizeClass::Large);
        assert_eq!(options.orientation, Orientation::Landscape);
        assert_eq!(options.styles, vec!["a{}"]);
        assert_eq!(options.unmapped_fields, UnmappedFieldPolicy::Reject);
    }

    #[test]
    fn test_render_skipped_on_core_error() {
        let renderer = CountingRenderer {
            calls: AtomicUsize::new(0),
        };
        let result = Pagetab::new().render(&renderer, &[], &[], "out.pdf");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_render_invokes_renderer_once() {
        let renderer = CountingRenderer {
            calls: AtomicUsize::new(0),
        };
        let columns = vec![ColumnSpec::new("Age", "age", 5)];
        let doc = Pagetab::new()
            .render(&renderer, &columns, &[Row::new().with("age", 1)], "out.pdf")
            .unwrap();
        assert_eq!(doc.row_count(), 1);
        assert_eq!(renderer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_generate_source_uses_source_title() {
        let source = TableSource::from_json(
            r#"{"title": "From Source", "columns": [{"name": "A", "dataKey": "a", "wrapWidth": 3}], "rows": []}"#,
        )
        .unwrap();
        let doc = Pagetab::new().title("Builder").generate_source(&source).unwrap();
        assert_eq!(doc.title, "From Source");
        assert_eq!(doc.block_count(), 1);
    }

    #[test]
    fn test_to_html_default() {
        let columns = vec![ColumnSpec::new("Age", "age", 5)];
        let html = to_html(&columns, &[]).unwrap();
        assert!(html.contains("font-size: 12px"));
        assert_eq!(html.matches("<thead>").count(), 1);
    }
}
