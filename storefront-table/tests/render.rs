use storefront_table::{
    Alignment, Cell, ColumnDef, DataTable, TableError, TextOptions, render_text, render_text_with,
};

#[derive(Debug, Clone)]
struct Color {
    name: String,
    code: String,
}

fn color(name: &str, code: &str) -> Color {
    Color {
        name: name.to_string(),
        code: code.to_string(),
    }
}

fn columns() -> Vec<ColumnDef<Color>> {
    vec![
        ColumnDef::new("name", "Color Name", |c: &Color| Cell::strong(&c.name)).searchable(),
        ColumnDef::new("code", "Color Code", |c: &Color| Cell::text(&c.code)).searchable(),
    ]
}

fn color_table(rows: Vec<Color>) -> DataTable<Color> {
    DataTable::builder()
        .data(rows)
        .columns(columns())
        .default_page_size(10)
        .enable_search_dropdown(true)
        .suggestion_label(|c: &Color| format!("{} - {}", c.name, c.code))
        .action("[+ Add Color]")
        .build()
        .unwrap()
}

// ============================================================================
// Text output
// ============================================================================

#[test]
fn test_render_filtered_table_with_dropdown() {
    let mut table = color_table(vec![color("Black", "BLK"), color("White", "WHT")]);
    table.focus_search();
    table.set_query("bla");

    let expected = [
        "Search: bla  [+ Add Color]",
        "  > Black - BLK",
        "Color Name  Color Code",
        "----------  ----------",
        "Black       BLK",
        "Page 1 of 1 | rows 1-1 of 1 (filtered from 2)",
    ]
    .join("\n");
    assert_eq!(render_text(&table.view()), expected);
}

#[test]
fn test_render_placeholder_when_query_empty() {
    let table = color_table(vec![color("Black", "BLK")]);
    let text = render_text(&table.view());
    assert!(text.starts_with("Search: Search...  [+ Add Color]\n"));
    assert!(text.ends_with("Page 1 of 1 | rows 1-1 of 1"));
}

#[test]
fn test_render_empty_states() {
    let mut table = color_table(Vec::new());
    let text = render_text(&table.view());
    assert!(text.contains("No data available"));
    assert!(text.ends_with("Page 1 of 1 | 0 rows"));

    table.set_data(vec![color("Black", "BLK")]);
    table.set_query("zzz");
    let text = render_text(&table.view());
    assert!(text.contains("No results match your search"));
    assert!(!text.contains("No data available"));
    assert!(text.ends_with("Page 1 of 1 | 0 rows (filtered from 1)"));
}

#[test]
fn test_render_without_toolbar_or_footer() {
    let table = DataTable::builder()
        .data(vec![color("Black", "BLK")])
        .columns(columns())
        .default_page_size(10)
        .build()
        .unwrap();
    let options = TextOptions {
        footer: false,
        ..TextOptions::default()
    };

    let expected = ["Color Name  Color Code", "----------  ----------", "Black       BLK"].join("\n");
    assert_eq!(render_text_with(&table.view(), &options), expected);
}

#[test]
fn test_render_truncates_and_aligns() {
    let table = DataTable::builder()
        .data(vec![color("Midnight Blue", "MNB")])
        .columns(vec![
            ColumnDef::new("name", "Name", |c: &Color| Cell::text(&c.name)).max_width(6),
            ColumnDef::new("code", "Code", |c: &Color| Cell::text(&c.code))
                .align(Alignment::Right),
        ])
        .default_page_size(10)
        .build()
        .unwrap();
    let options = TextOptions {
        footer: false,
        ..TextOptions::default()
    };

    let expected = ["Name    Code", "------  ----", "Midni…   MNB"].join("\n");
    assert_eq!(render_text_with(&table.view(), &options), expected);
}

#[test]
fn test_render_stacked_cells_span_lines() {
    let table = DataTable::builder()
        .data(vec![color("Black", "BLK")])
        .columns(vec![
            ColumnDef::new("color", "Color", |c: &Color| {
                Cell::stack([Cell::strong(&c.name), Cell::muted(&c.code)])
            }),
            ColumnDef::new("status", "Status", |_: &Color| Cell::text("Active")),
        ])
        .default_page_size(10)
        .build()
        .unwrap();
    let options = TextOptions {
        footer: false,
        ..TextOptions::default()
    };

    let expected = ["Color  Status", "-----  ------", "Black  Active", "BLK"].join("\n");
    assert_eq!(render_text_with(&table.view(), &options), expected);
}

#[test]
fn test_view_renders_only_current_page() {
    let rows: Vec<Color> = (0..25).map(|i| color(&format!("c{}", i), "X")).collect();
    let mut table = DataTable::builder()
        .data(rows)
        .columns(columns())
        .default_page_size(10)
        .build()
        .unwrap();
    table.set_page(2);

    let view = table.view();
    let indices: Vec<usize> = view.body.rows().iter().map(|r| r.index).collect();
    assert_eq!(indices, (20..25).collect::<Vec<_>>());
    assert_eq!(view.body.rows()[0].cells[0], Cell::strong("c20"));
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn test_build_requires_columns() {
    let result = DataTable::<Color>::builder().default_page_size(10).build();
    assert_eq!(result.unwrap_err(), TableError::EmptyColumns);
}

#[test]
fn test_build_rejects_duplicate_keys() {
    let result = DataTable::builder()
        .columns(columns())
        .column(ColumnDef::new("name", "Again", |c: &Color| Cell::text(&c.name)))
        .default_page_size(10)
        .build();
    assert_eq!(
        result.unwrap_err(),
        TableError::DuplicateColumnKey {
            key: "name".to_string()
        }
    );
}

#[test]
fn test_build_requires_page_size() {
    let missing = DataTable::builder().columns(columns()).build();
    assert_eq!(missing.unwrap_err(), TableError::ZeroPageSize);

    let zero = DataTable::builder()
        .columns(columns())
        .default_page_size(0)
        .build();
    assert_eq!(zero.unwrap_err(), TableError::ZeroPageSize);
}

#[test]
fn test_dropdown_requires_label() {
    let result = DataTable::builder()
        .columns(columns())
        .default_page_size(10)
        .enable_search_dropdown(true)
        .build();
    assert_eq!(result.unwrap_err(), TableError::MissingSuggestionLabel);
}
