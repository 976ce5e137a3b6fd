//! Column descriptors.

use std::fmt;

use crate::cell::Cell;

/// Boxed render function for a column.
pub type RenderFn<T> = Box<dyn Fn(&T) -> Cell>;

/// Boxed raw-text accessor used for search.
pub type TextFn<T> = Box<dyn Fn(&T) -> String>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Describes how one column is labelled, rendered and searched.
///
/// A searchable column contributes text to the free-text filter. The text
/// comes from the explicit accessor set with [`search_text`](Self::search_text)
/// when there is one, otherwise from the plain-text form of the rendered cell.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnDef::new("name", "Color Name", |c: &Color| Cell::strong(&c.name)).searchable(),
///     ColumnDef::new("hexCode", "Hex Code", |c: &Color| swatch(c))
///         .search_text(|c: &Color| c.hex_code.clone()),
///     ColumnDef::new("total", "Total", |o: &Order| Cell::text(money(o.total)))
///         .align(Alignment::Right),
/// ];
/// ```
pub struct ColumnDef<T> {
    key: String,
    header: String,
    render: RenderFn<T>,
    search_text: Option<TextFn<T>>,
    searchable: bool,
    align: Alignment,
    max_width: Option<usize>,
}

impl<T> ColumnDef<T> {
    /// Create a column. Columns are not searchable until marked so.
    pub fn new(
        key: impl Into<String>,
        header: impl Into<String>,
        render: impl Fn(&T) -> Cell + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            render: Box::new(render),
            search_text: None,
            searchable: false,
            align: Alignment::Left,
            max_width: None,
        }
    }

    /// Include this column's rendered text in the search filter.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Search against raw text instead of the rendered cell.
    ///
    /// Implies [`searchable`](Self::searchable).
    pub fn search_text(mut self, accessor: impl Fn(&T) -> String + 'static) -> Self {
        self.search_text = Some(Box::new(accessor));
        self.searchable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Cap the display width of this column; longer text is truncated.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(1));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn alignment(&self) -> Alignment {
        self.align
    }

    pub fn width_limit(&self) -> Option<usize> {
        self.max_width
    }

    /// Render the cell for a row.
    pub fn render(&self, row: &T) -> Cell {
        (self.render)(row)
    }

    /// Text this column contributes to search, or `None` if it does not take part.
    pub fn searchable_text(&self, row: &T) -> Option<String> {
        if !self.searchable {
            return None;
        }
        Some(match &self.search_text {
            Some(accessor) => accessor(row),
            None => self.render(row).plain_text(),
        })
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("searchable", &self.searchable)
            .field("has_search_text", &self.search_text.is_some())
            .field("align", &self.align)
            .field("max_width", &self.max_width)
            .finish()
    }
}
