//! Searchable, paginated data table over caller-owned rows.
//!
//! The table is generic over the row type. Callers describe each column with a
//! [`ColumnDef`] (header, render function, search participation) and hand the
//! table a `Vec<T>`; the table owns only transient UI state: the query text,
//! the current page and whether the suggestion dropdown is open.
//!
//! # Example
//!
//! ```ignore
//! use storefront_table::prelude::*;
//!
//! struct Color { name: String, code: String }
//!
//! let mut table = DataTable::builder()
//!     .data(colors)
//!     .columns(vec![
//!         ColumnDef::new("name", "Color Name", |c: &Color| Cell::strong(&c.name)).searchable(),
//!         ColumnDef::new("code", "Color Code", |c: &Color| Cell::text(&c.code)).searchable(),
//!     ])
//!     .default_page_size(10)
//!     .enable_search_dropdown(true)
//!     .suggestion_label(|c: &Color| format!("{} - {}", c.name, c.code))
//!     .build()?;
//!
//! table.set_query("bla");
//! println!("{}", render_text(&table.view()));
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod filter;
pub mod page;
pub mod render;
pub mod table;
pub mod text;

pub use cell::{Cell, Tone};
pub use column::{Alignment, ColumnDef};
pub use error::TableError;
pub use render::{TextOptions, render_text, render_text_with};
pub use table::{
    Body, ColumnHeader, DataTable, DataTableBuilder, EventResult, PageInfo, RenderedRow,
    Suggestion, TableEvent, TableView, Toolbar,
};

pub mod prelude {
    pub use crate::cell::{Cell, Tone};
    pub use crate::column::{Alignment, ColumnDef};
    pub use crate::error::TableError;
    pub use crate::render::{TextOptions, render_text, render_text_with};
    pub use crate::table::{Body, DataTable, EventResult, Suggestion, TableEvent, TableView};
}
