//! HTML markup for paginated tables.
//!
//! Markup is built as a tree of typed [`Node`]s and serialized once, so
//! escaping happens in exactly one place.

mod assemble;
mod node;

pub use assemble::{
    assemble, assemble_document, base_styles, header_node, row_node, wrap_static,
};
pub use node::{escape_html, Node};
