//! Data table state.

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::cell::Cell;
use crate::column::ColumnDef;
use crate::error::TableError;
use crate::filter;
use crate::page;

/// Maximum number of suggestions shown when no limit is configured.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

pub(super) type LabelFn<T> = Box<dyn Fn(&T) -> String>;
pub(super) type SelectFn<T> = Box<dyn FnMut(&T)>;

/// A searchable, paginated table over caller-owned rows.
///
/// `DataTable<T>` holds:
/// - The rows and the column descriptors handed in by the caller
/// - The query text, current page and page size
/// - Whether the search input has focus (which drives the suggestion dropdown)
///
/// The filtered row set is recomputed from `(rows, query, columns)` whenever
/// one of them changes, and the current page is kept inside
/// `[0, page_count - 1]` at all times.
pub struct DataTable<T> {
    pub(super) rows: Vec<T>,
    pub(super) columns: Vec<ColumnDef<T>>,
    /// Indices into `rows` that match the current query, in data order.
    pub(super) filtered: Vec<usize>,
    pub(super) query: String,
    pub(super) page: usize,
    pub(super) page_size: usize,
    default_page_size: usize,
    pub(super) search_focused: bool,
    pub(super) dropdown_enabled: bool,
    pub(super) suggestion_label: Option<LabelFn<T>>,
    pub(super) on_suggestion_select: Option<SelectFn<T>>,
    pub(super) suggestion_limit: usize,
    pub(super) action: Option<Cell>,
}

impl<T> DataTable<T> {
    /// Start building a table.
    pub fn builder() -> DataTableBuilder<T> {
        DataTableBuilder::new()
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// All rows, unfiltered.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    /// Number of rows before filtering.
    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows matching the current query.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Replace the rows. The page goes back to the first one.
    pub fn set_data(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.page = 0;
        self.refilter();
        debug!("Table data replaced: {} rows", self.rows.len());
    }

    /// Replace the rows, staying on the current page if it still exists.
    pub fn set_data_preserving_page(&mut self, rows: Vec<T>) {
        let page = self.page;
        self.rows = rows;
        self.refilter();
        self.page = page::clamp_page(page, self.page_count());
        debug!(
            "Table data replaced: {} rows, page {}",
            self.rows.len(),
            self.page
        );
    }

    /// Replace the rows with data that may not have loaded yet.
    ///
    /// `None` is shown as an empty table.
    pub fn set_data_opt(&mut self, rows: Option<Vec<T>>) {
        self.set_data(rows.unwrap_or_default());
    }

    /// Indices of the rows matching the current query, in data order.
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// Rows matching the current query, in data order.
    pub fn filtered_rows(&self) -> Vec<&T> {
        self.filtered.iter().map(|&index| &self.rows[index]).collect()
    }

    /// Indices of the rows on the current page.
    pub fn page_indices(&self) -> &[usize] {
        let bounds = page::page_bounds(self.page, self.page_size, self.filtered.len());
        &self.filtered[bounds]
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        self.page_indices()
            .iter()
            .map(|&index| &self.rows[index])
            .collect()
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// The query text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the query text. A changed query returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.page = 0;
        self.refilter();
        trace!(
            "Query {:?} matched {} of {} rows",
            self.query,
            self.filtered.len(),
            self.rows.len()
        );
    }

    /// Clear the query, restoring the full row set.
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Returns `true` if the search input should be shown.
    pub fn has_search_input(&self) -> bool {
        self.dropdown_enabled
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    /// The search input gained focus.
    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    /// The search input lost focus. Closes the suggestion dropdown.
    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    /// Returns `true` while the suggestion dropdown is showing.
    ///
    /// That is: the dropdown is enabled, the input has focus and the query
    /// has non-blank text.
    pub fn suggestions_open(&self) -> bool {
        self.dropdown_enabled && self.search_focused && !self.query.trim().is_empty()
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    /// The slot rendered next to the search bar, if any.
    pub fn action(&self) -> Option<&Cell> {
        self.action.as_ref()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page, 0-indexed.
    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; at least one.
    pub fn page_count(&self) -> usize {
        page::page_count(self.filtered.len(), self.page_size)
    }

    /// Go to a page. Out-of-range pages are clamped to the last page.
    pub fn set_page(&mut self, page: usize) {
        let clamped = page::clamp_page(page, self.page_count());
        if clamped != page {
            debug!("Page {} out of range, clamped to {}", page, clamped);
        }
        self.page = clamped;
    }

    /// Advance one page. Returns `false` if already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 >= self.page_count() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Go back one page. Returns `false` if already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        let first_visible = self.page * self.page_size;
        self.page_size = page_size;
        self.page = page::clamp_page(first_visible / page_size, self.page_count());
        Ok(())
    }

    /// Return to the initial UI state: no query, first page, default page
    /// size, search input unfocused.
    pub fn reset(&mut self) {
        self.query.clear();
        self.page = 0;
        self.page_size = self.default_page_size;
        self.search_focused = false;
        self.refilter();
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn refilter(&mut self) {
        self.filtered = filter::filter_indices(&self.rows, &self.columns, &self.query);
        let count = self.page_count();
        if self.page >= count {
            self.page = 0;
        }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .field("filtered", &self.filtered.len())
            .field("query", &self.query)
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("search_focused", &self.search_focused)
            .field("dropdown_enabled", &self.dropdown_enabled)
            .finish()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for a [`DataTable`].
///
/// # Required
///
/// - `columns` - at least one, with unique keys
/// - `default_page_size` - at least 1
/// - `suggestion_label` - only when `enable_search_dropdown(true)`
///
/// # Example
///
/// ```ignore
/// let table = DataTable::builder()
///     .data(sizes)
///     .columns(size_columns())
///     .default_page_size(10)
///     .enable_search_dropdown(true)
///     .suggestion_label(|s: &Size| format!("{} — {}", s.code, s.label))
///     .on_suggestion_select(|s: &Size| open_detail(s.id))
///     .action(Cell::text("[+ Add Size]"))
///     .build()?;
/// ```
pub struct DataTableBuilder<T> {
    rows: Vec<T>,
    columns: Vec<ColumnDef<T>>,
    default_page_size: Option<usize>,
    dropdown_enabled: bool,
    suggestion_label: Option<LabelFn<T>>,
    on_suggestion_select: Option<SelectFn<T>>,
    suggestion_limit: usize,
    action: Option<Cell>,
}

impl<T> DataTableBuilder<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            default_page_size: None,
            dropdown_enabled: false,
            suggestion_label: None,
            on_suggestion_select: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            action: None,
        }
    }

    /// Initial rows.
    pub fn data(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    /// Initial rows that may not have loaded yet; `None` means empty.
    pub fn data_opt(mut self, rows: Option<Vec<T>>) -> Self {
        self.rows = rows.unwrap_or_default();
        self
    }

    pub fn columns(mut self, columns: Vec<ColumnDef<T>>) -> Self {
        self.columns = columns;
        self
    }

    /// Add a single column.
    pub fn column(mut self, column: ColumnDef<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = Some(page_size);
        self
    }

    /// Show the search input and its suggestion dropdown.
    pub fn enable_search_dropdown(mut self, enabled: bool) -> Self {
        self.dropdown_enabled = enabled;
        self
    }

    /// Build the human-readable label of a suggestion entry.
    pub fn suggestion_label(mut self, label: impl Fn(&T) -> String + 'static) -> Self {
        self.suggestion_label = Some(Box::new(label));
        self
    }

    /// Called once with the chosen row when a suggestion is selected.
    pub fn on_suggestion_select(mut self, on_select: impl FnMut(&T) + 'static) -> Self {
        self.on_suggestion_select = Some(Box::new(on_select));
        self
    }

    /// Maximum number of suggestions. Values below 1 are raised to 1.
    pub fn suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit.max(1);
        self
    }

    /// Content rendered next to the search bar, typically a "create" button.
    pub fn action(mut self, action: impl Into<Cell>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Validate the configuration and build the table.
    pub fn build(self) -> Result<DataTable<T>, TableError> {
        if self.columns.is_empty() {
            return Err(TableError::EmptyColumns);
        }

        let mut keys = HashSet::new();
        for column in &self.columns {
            if !keys.insert(column.key()) {
                return Err(TableError::DuplicateColumnKey {
                    key: column.key().to_string(),
                });
            }
        }

        let default_page_size = match self.default_page_size {
            Some(size) if size >= 1 => size,
            _ => return Err(TableError::ZeroPageSize),
        };

        if self.dropdown_enabled && self.suggestion_label.is_none() {
            return Err(TableError::MissingSuggestionLabel);
        }

        let mut table = DataTable {
            rows: self.rows,
            columns: self.columns,
            filtered: Vec::new(),
            query: String::new(),
            page: 0,
            page_size: default_page_size,
            default_page_size,
            search_focused: false,
            dropdown_enabled: self.dropdown_enabled,
            suggestion_label: self.suggestion_label,
            on_suggestion_select: self.on_suggestion_select,
            suggestion_limit: self.suggestion_limit,
            action: self.action,
        };
        table.refilter();
        Ok(table)
    }
}

impl<T> Default for DataTableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
