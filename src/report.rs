//! JSON pagination report.

use serde::Serialize;

use crate::capacity::{CapacityProfile, FontSizeClass, Orientation};
use crate::error::Result;
use crate::model::TableDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Summary of how a document was paginated.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationReport {
    pub title: String,
    pub font_size: FontSizeClass,
    pub orientation: Orientation,
    pub profile: CapacityProfile,
    pub total_rows: usize,
    pub blocks: Vec<BlockReport>,
}

/// One page block in a [`PaginationReport`].
#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    pub index: usize,
    pub row_count: usize,
    pub cost: f64,
    /// Whether a single oversized row pushes the block past capacity
    pub overflow: bool,
}

impl PaginationReport {
    /// Summarize a generated document.
    pub fn from_document(doc: &TableDocument) -> Self {
        Self {
            title: doc.title.clone(),
            font_size: doc.font_size,
            orientation: doc.orientation,
            profile: doc.profile,
            total_rows: doc.row_count(),
            blocks: doc
                .blocks
                .iter()
                .enumerate()
                .map(|(index, block)| BlockReport {
                    index,
                    row_count: block.row_count(),
                    cost: block.cost,
                    overflow: block.overflows(&doc.profile),
                })
                .collect(),
        }
    }
}

/// Render a document's pagination report as JSON.
pub fn to_json(doc: &TableDocument, format: JsonFormat) -> Result<String> {
    let report = PaginationReport::from_document(doc);
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&report)?,
        JsonFormat::Compact => serde_json::to_string(&report)?,
    };
    Ok(json)
}
