//! Typed markup nodes and their HTML serialization.

use std::sync::Arc;

/// CSS class that carries the forced page break.
pub const PAGE_CLASS: &str = "page";

/// One node of the output markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Whole-document envelope
    Document {
        title: String,
        styles: Vec<String>,
        body: Vec<Node>,
    },
    /// One page block: a table inside a forced-break container
    Block(Vec<Node>),
    /// Header row labels
    Header(Vec<String>),
    /// Body row of cells
    Row(Vec<Node>),
    /// Body cell; lines are separated by `<br>`
    Cell(Vec<String>),
    /// Already serialized markup, emitted verbatim
    Fragment(Arc<str>),
}

impl Node {
    /// Serialize this node to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append this node's HTML to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Document { title, styles, body } => {
                out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
                out.push_str("<title>");
                out.push_str(&escape_html(title));
                out.push_str("</title><style>");
                // Style rules are raw CSS, but must not close the element.
                out.push_str(&styles.join(" ").replace("</", "<\\/"));
                out.push_str("</style></head><body>");
                for node in body {
                    node.write_html(out);
                }
                out.push_str("</body></html>");
            }
            Node::Block(children) => {
                out.push_str("<div class=\"");
                out.push_str(PAGE_CLASS);
                out.push_str("\"><table width=\"100%\">");
                for node in children {
                    node.write_html(out);
                }
                out.push_str("</table></div>");
            }
            Node::Header(labels) => {
                out.push_str("<thead><tr>");
                for label in labels {
                    out.push_str("<th>");
                    out.push_str(&escape_html(label));
                    out.push_str("</th>");
                }
                out.push_str("</tr></thead>");
            }
            Node::Row(cells) => {
                out.push_str("<tr>");
                for cell in cells {
                    cell.write_html(out);
                }
                out.push_str("</tr>");
            }
            Node::Cell(lines) => {
                out.push_str("<td>");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.push_str("<br>");
                    }
                    out.push_str(&escape_html(line));
                }
                out.push_str("</td>");
            }
            Node::Fragment(html) => out.push_str(html),
        }
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"x\" 'y'"), "&quot;x&quot; &#39;y&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_cell_joins_lines_with_br() {
        let cell = Node::Cell(vec!["one".into(), "<two>".into()]);
        assert_eq!(cell.to_html(), "<td>one<br>&lt;two&gt;</td>");
    }

    #[test]
    fn test_header_serialization() {
        let header = Node::Header(vec!["Name".into(), "A&B".into()]);
        assert_eq!(
            header.to_html(),
            "<thead><tr><th>Name</th><th>A&amp;B</th></tr></thead>"
        );
    }

    #[test]
    fn test_block_wraps_table_in_page_container() {
        let block = Node::Block(vec![Node::Row(vec![Node::Cell(vec!["x".into()])])]);
        assert_eq!(
            block.to_html(),
            "<div class=\"page\"><table width=\"100%\"><tr><td>x</td></tr></table></div>"
        );
    }

    #[test]
    fn test_document_envelope() {
        let doc = Node::Document {
            title: "T<1>".into(),
            styles: vec!["a{}".into(), "b{}".into()],
            body: vec![Node::Fragment(Arc::from("<p>raw</p>"))],
        };
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html><html><head>"));
        assert!(html.contains("<title>T&lt;1&gt;</title>"));
        assert!(html.contains("<style>a{} b{}</style>"));
        assert!(html.contains("<body><p>raw</p></body>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_style_cannot_close_element() {
        let doc = Node::Document {
            title: String::new(),
            styles: vec!["</style><script>".into()],
            body: Vec::new(),
        };
        assert!(!doc.to_html().contains("</style><script>"));
    }
}
