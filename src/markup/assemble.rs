//! Document assembly: page blocks into one HTML document.

use std::sync::Arc;

use crate::capacity::FontSizeClass;
use crate::layout::AccumulatedRow;
use crate::model::{ColumnSpec, Header, PageBlock, TableDocument};

use super::node::{Node, PAGE_CLASS};

/// The three rules every document needs: text size, collapsed borders and
/// a forced page break after each page container.
pub fn base_styles(font_size: FontSizeClass) -> Vec<String> {
    vec![
        format!("body, tr, td, th{{ font-size: {}; }}", font_size.css_size()),
        "table{ border-collapse:collapse; } table, td, th{ border:1px solid black; }".to_string(),
        format!(
            ".{}{{ display: block; clear: both; page-break-after: always; }}",
            PAGE_CLASS
        ),
    ]
}

/// Header node for a schema.
pub fn header_node(columns: &[ColumnSpec]) -> Node {
    Node::Header(Header::from_columns(columns).labels)
}

/// Body row node for an accumulated row.
pub fn row_node(row: &AccumulatedRow) -> Node {
    Node::Row(
        row.cells
            .iter()
            .map(|cell| Node::Cell(cell.lines.clone()))
            .collect(),
    )
}

/// Assemble page blocks into a complete HTML document.
///
/// The header is serialized once and reused verbatim in every block.
/// `extra_styles` follow `base_styles`, so later rules win by order.
pub fn assemble(
    title: &str,
    columns: &[ColumnSpec],
    blocks: &[PageBlock],
    base_styles: &[String],
    extra_styles: &[String],
) -> String {
    let header: Arc<str> = Arc::from(header_node(columns).to_html());

    let body = blocks
        .iter()
        .map(|block| {
            let mut children = Vec::with_capacity(block.rows.len() + 1);
            children.push(Node::Fragment(Arc::clone(&header)));
            children.extend(block.rows.iter().map(row_node));
            Node::Block(children)
        })
        .collect();

    let styles = base_styles.iter().chain(extra_styles).cloned().collect();

    Node::Document {
        title: title.to_string(),
        styles,
        body,
    }
    .to_html()
}

/// Assemble a generated document with its own base and extra styles.
pub fn assemble_document(doc: &TableDocument) -> String {
    assemble(
        &doc.title,
        &doc.columns,
        &doc.blocks,
        &base_styles(doc.font_size),
        &doc.styles,
    )
}

/// Wrap caller-supplied body markup in the titled document envelope.
///
/// `content` is emitted verbatim inside `<body>`; it is not paginated.
pub fn wrap_static(
    title: &str,
    content: &str,
    font_size: FontSizeClass,
    extra_styles: &[String],
) -> String {
    let styles = base_styles(font_size)
        .into_iter()
        .chain(extra_styles.iter().cloned())
        .collect();

    Node::Document {
        title: title.to_string(),
        styles,
        body: vec![Node::Fragment(Arc::from(content))],
    }
    .to_html()
}
