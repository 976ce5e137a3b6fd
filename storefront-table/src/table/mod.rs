//! The data table: state, events and view snapshots.
//!
//! The table provides:
//! - Case-insensitive free-text search over searchable columns
//! - Pagination with a page that always stays in range
//! - An optional suggestion dropdown fed by the same search predicate
//! - Explicit "no data" and "no matches" states
//!
//! Rows are only read, never mutated. Replacing the data (after a refetch)
//! goes through [`DataTable::set_data`].

mod events;
mod state;
mod suggest;
mod view;

pub use events::{EventResult, TableEvent};
pub use state::{DEFAULT_SUGGESTION_LIMIT, DataTable, DataTableBuilder};
pub use suggest::Suggestion;
pub use view::{Body, ColumnHeader, PageInfo, RenderedRow, TableView, Toolbar};
