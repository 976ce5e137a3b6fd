//! Plain-text rendering of a [`TableView`].
//!
//! Produces a fixed-width grid suitable for a terminal or a log file:
//!
//! ```text
//! Search: bla                [+ Add Color]
//!   > Black - BLK
//! Color Name  Color Code  Hex Code
//! ----------  ----------  --------
//! Black       BLK         #000000
//! Page 1 of 1 | rows 1-1 of 1 (filtered from 2)
//! ```

use crate::table::{Body, ColumnHeader, PageInfo, TableView};
use crate::text::{display_width, pad_to_width, truncate_to_width};

/// Options for [`render_text_with`].
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Spaces between columns.
    pub column_gap: usize,
    /// Print the pagination line under the table.
    pub footer: bool,
    pub no_data_text: String,
    pub no_match_text: String,
    pub search_placeholder: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            column_gap: 2,
            footer: true,
            no_data_text: "No data available".to_string(),
            no_match_text: "No results match your search".to_string(),
            search_placeholder: "Search...".to_string(),
        }
    }
}

/// Render with default options.
pub fn render_text(view: &TableView) -> String {
    render_text_with(view, &TextOptions::default())
}

pub fn render_text_with(view: &TableView, options: &TextOptions) -> String {
    let gap = " ".repeat(options.column_gap);
    let mut out = Vec::new();

    if let Some(toolbar) = toolbar_line(view, options, &gap) {
        out.push(toolbar);
        for suggestion in &view.suggestions {
            out.push(format!("  > {}", suggestion.label));
        }
    }

    // Cell text per row, per column, per line; truncated to the column limit.
    let rows: Vec<Vec<Vec<String>>> = view
        .body
        .rows()
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .zip(&view.columns)
                .map(|(cell, column)| {
                    cell.lines()
                        .iter()
                        .map(|line| fit(line, column))
                        .collect()
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = view
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let header = display_width(&fit(&column.header, column));
            rows.iter()
                .filter_map(|row| row.get(i))
                .flatten()
                .map(|line| display_width(line))
                .fold(header, usize::max)
        })
        .collect();

    out.push(join_line(
        view.columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad_to_width(&fit(&column.header, column), width, column.align)),
        &gap,
    ));
    out.push(join_line(widths.iter().map(|&width| "-".repeat(width)), &gap));

    match &view.body {
        Body::Rows(_) => {
            for row in &rows {
                let height = row.iter().map(Vec::len).max().unwrap_or(1);
                for line in 0..height {
                    out.push(join_line(
                        row.iter().zip(&view.columns).zip(&widths).map(
                            |((lines, column), &width)| {
                                let text = lines.get(line).map(String::as_str).unwrap_or("");
                                pad_to_width(text, width, column.align)
                            },
                        ),
                        &gap,
                    ));
                }
            }
        }
        Body::NoData => out.push(options.no_data_text.clone()),
        Body::NoMatches => out.push(options.no_match_text.clone()),
    }

    if options.footer {
        out.push(footer_line(&view.page));
    }

    out.join("\n")
}

fn toolbar_line(view: &TableView, options: &TextOptions, gap: &str) -> Option<String> {
    let search = view.toolbar.search.as_ref().map(|query| {
        if query.is_empty() {
            format!("Search: {}", options.search_placeholder)
        } else {
            format!("Search: {}", query)
        }
    });
    let action = view
        .toolbar
        .action
        .as_ref()
        .map(|cell| cell.plain_text())
        .filter(|text| !text.is_empty());

    match (search, action) {
        (Some(search), Some(action)) => Some(format!("{}{}{}", search, gap, action)),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

fn footer_line(page: &PageInfo) -> String {
    let rows = match page.row_range() {
        Some((first, last)) => format!("rows {}-{} of {}", first, last, page.filtered),
        None => "0 rows".to_string(),
    };
    let mut line = format!("Page {} of {} | {}", page.display_page(), page.count, rows);
    if page.filtered != page.total {
        line.push_str(&format!(" (filtered from {})", page.total));
    }
    line
}

fn fit(text: &str, column: &ColumnHeader) -> String {
    match column.max_width {
        Some(width) => truncate_to_width(text, width),
        None => text.to_string(),
    }
}

fn join_line(parts: impl Iterator<Item = String>, gap: &str) -> String {
    parts
        .collect::<Vec<_>>()
        .join(gap)
        .trim_end()
        .to_string()
}
