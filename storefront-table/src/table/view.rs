//! Snapshots of what the table shows.

use crate::cell::Cell;
use crate::column::Alignment;

use super::state::DataTable;
use super::suggest::Suggestion;

/// Everything needed to draw the table once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub toolbar: Toolbar,
    /// Open suggestions; empty while the dropdown is closed.
    pub suggestions: Vec<Suggestion>,
    pub columns: Vec<ColumnHeader>,
    pub body: Body,
    pub page: PageInfo,
}

/// The bar above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    /// Query text when the search input is shown.
    pub search: Option<String>,
    pub search_focused: bool,
    pub action: Option<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub key: String,
    pub header: String,
    pub align: Alignment,
    pub max_width: Option<usize>,
}

/// The table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Rows of the current page.
    Rows(Vec<RenderedRow>),
    /// There are no rows at all.
    NoData,
    /// There are rows, but none match the query.
    NoMatches,
}

impl Body {
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::NoData | Self::NoMatches => &[],
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Index of the row in the table's data; stable identity for the row.
    pub index: usize,
    /// One cell per column, in column order.
    pub cells: Vec<Cell>,
}

/// Pagination summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, 0-indexed.
    pub current: usize,
    pub count: usize,
    pub page_size: usize,
    pub filtered: usize,
    pub total: usize,
}

impl PageInfo {
    /// Current page, 1-indexed, as shown to users.
    pub fn display_page(&self) -> usize {
        self.current + 1
    }

    /// 1-indexed range of filtered rows on this page, `None` when empty.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.filtered == 0 {
            return None;
        }
        let first = self.current * self.page_size + 1;
        let last = (first + self.page_size - 1).min(self.filtered);
        Some((first, last))
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.count
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }
}

impl<T> DataTable<T> {
    /// Render the current state into a view snapshot.
    ///
    /// Only rows on the current page are passed through the column render
    /// functions.
    pub fn view(&self) -> TableView {
        let columns = self
            .columns
            .iter()
            .map(|column| ColumnHeader {
                key: column.key().to_string(),
                header: column.header().to_string(),
                align: column.alignment(),
                max_width: column.width_limit(),
            })
            .collect();

        let body = if self.rows.is_empty() {
            Body::NoData
        } else if self.filtered.is_empty() {
            Body::NoMatches
        } else {
            Body::Rows(
                self.page_indices()
                    .iter()
                    .map(|&index| RenderedRow {
                        index,
                        cells: self
                            .columns
                            .iter()
                            .map(|column| column.render(&self.rows[index]))
                            .collect(),
                    })
                    .collect(),
            )
        };

        TableView {
            toolbar: Toolbar {
                search: self.has_search_input().then(|| self.query.clone()),
                search_focused: self.search_focused,
                action: self.action.clone(),
            },
            suggestions: self.suggestions(),
            columns,
            body,
            page: PageInfo {
                current: self.page,
                count: self.page_count(),
                page_size: self.page_size,
                filtered: self.filtered.len(),
                total: self.rows.len(),
            },
        }
    }
}
