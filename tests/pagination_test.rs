//! Integration tests for table pagination.

use pagetab::{
    generate, CapacityEntry, CapacityTable, ColumnSpec, Error, FontSizeClass, GenerateOptions,
    Orientation, Row, TableDocument,
};

fn table(rows_per_page: u32, weight: f64) -> CapacityTable {
    CapacityTable::new(vec![CapacityEntry {
        font_size: FontSizeClass::Small,
        orientation: Orientation::Portrait,
        rows_per_page,
        wrapped_line_weight: weight,
    }])
    .unwrap()
}

fn options(rows_per_page: u32, weight: f64) -> GenerateOptions {
    GenerateOptions::new().with_capacity_table(table(rows_per_page, weight))
}

fn block_values(doc: &TableDocument) -> Vec<Vec<String>> {
    doc.blocks
        .iter()
        .map(|b| b.rows.iter().map(|r| r.cells[0].lines.join(" ")).collect())
        .collect()
}

#[test]
fn test_three_rows_two_per_page() {
    let columns = vec![ColumnSpec::new("Age", "age", 5)];
    let rows: Vec<Row> = ["1", "2", "3"]
        .iter()
        .map(|v| Row::new().with("age", v))
        .collect();

    let doc = generate(&columns, &rows, &options(2, 1.0)).unwrap();

    assert_eq!(block_values(&doc), vec![vec!["1", "2"], vec!["3"]]);
    assert_eq!(doc.blocks[0].cost, 2.0);
}

#[test]
fn test_tall_row_alone_on_page() {
    let columns = vec![ColumnSpec::new("Text", "text", 3)];
    let rows = vec![Row::new().with("text", "aaa bbb ccc ddd eee")];

    let doc = generate(&columns, &rows, &options(3, 1.0)).unwrap();

    let holding: Vec<_> = doc.blocks.iter().filter(|b| !b.is_empty()).collect();
    assert_eq!(holding.len(), 1);
    assert_eq!(holding[0].row_count(), 1);
    assert_eq!(holding[0].cost, 5.0);
    assert_eq!(holding[0].rows[0].line_count, 5);
}

#[test]
fn test_zero_rows_one_header_only_block() {
    let columns = vec![ColumnSpec::new("Age", "age", 5)];
    let doc = generate(&columns, &[], &options(2, 1.0)).unwrap();

    assert_eq!(doc.block_count(), 1);
    assert!(doc.blocks[0].is_empty());

    let html = doc.to_html();
    assert_eq!(html.matches("<thead>").count(), 1);
    assert!(!html.contains("<td>"));
}

#[test]
fn test_rows_conserved_and_capacity_respected() {
    let columns = vec![
        ColumnSpec::new("Name", "name", 8),
        ColumnSpec::new("Description", "description", 12),
    ];
    let rows: Vec<Row> = (0..250)
        .map(|i| {
            let words = "lorem ipsum dolor sit amet ".repeat(i % 7);
            Row::new()
                .with("name", format!("row {}", i))
                .with("description", words)
        })
        .collect();

    let opts = GenerateOptions::new().with_font_size(FontSizeClass::Medium);
    let doc = generate(&columns, &rows, &opts).unwrap();

    assert_eq!(doc.row_count(), rows.len());
    let capacity = doc.profile.capacity();
    for block in &doc.blocks {
        if block.row_count() > 1 {
            assert!(block.cost <= capacity + 1e-9, "block cost {}", block.cost);
        }
    }

    // Rows stay in document order.
    let names: Vec<String> = doc
        .blocks
        .iter()
        .flat_map(|b| b.rows.iter().map(|r| r.cells[0].lines.join(" ")))
        .collect();
    let expected: Vec<String> = (0..250).map(|i| format!("row {}", i)).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_unmatched_fields_skipped_by_default() {
    let columns = vec![
        ColumnSpec::new("Name", "name", 10),
        ColumnSpec::new("Email", "email", 10),
    ];
    let rows = vec![Row::new().with("name", "Alice").with("phone", "555")];

    let doc = generate(&columns, &rows, &GenerateOptions::default()).unwrap();
    let row = &doc.blocks[0].rows[0];
    assert_eq!(row.cells.len(), 1);
    assert_eq!(row.cells[0].lines, vec!["Alice"]);
}

#[test]
fn test_unmatched_fields_rejected_when_strict() {
    let columns = vec![ColumnSpec::new("Name", "name", 10)];
    let rows = vec![Row::new().with("name", "Alice").with("phone", "555")];

    let result = generate(&columns, &rows, &GenerateOptions::new().strict());
    match result {
        Err(Error::UnmappedField { row, field }) => {
            assert_eq!(row, 0);
            assert_eq!(field, "phone");
        }
        other => panic!("expected UnmappedField, got {:?}", other.map(|d| d.row_count())),
    }
}

#[test]
fn test_configuration_error_before_rows() {
    let columns = vec![ColumnSpec::new("Name", "name", 10)];
    let opts = GenerateOptions::new()
        .with_capacity_table(table(2, 1.0))
        .with_font_size(FontSizeClass::Large);
    let result = generate(&columns, &[Row::new().with("name", "x")], &opts);
    assert!(matches!(result, Err(Error::Configuration(_))));
}
