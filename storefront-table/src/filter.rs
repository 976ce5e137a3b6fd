//! Free-text row filtering.
//!
//! Filtering is a pure function of the rows, the query and the columns: the
//! same inputs always produce the same indices, in data order.

use crate::column::ColumnDef;

/// Normalize a raw query for matching: surrounding whitespace is dropped and
/// the text is lowercased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns `true` if any searchable column of `row` contains `needle`.
///
/// `needle` must already be normalized with [`normalize_query`]. An empty
/// needle matches every row.
pub fn row_matches<T>(row: &T, columns: &[ColumnDef<T>], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .filter_map(|column| column.searchable_text(row))
        .any(|text| text.to_lowercase().contains(needle))
}

/// Indices of the rows matching `query`, in data order.
pub fn filter_indices<T>(rows: &[T], columns: &[ColumnDef<T>], query: &str) -> Vec<usize> {
    let needle = normalize_query(query);
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_matches(*row, columns, &needle))
        .map(|(index, _)| index)
        .collect()
}
