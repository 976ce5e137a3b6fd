//! List screens.
//!
//! Each screen describes how one resource appears in the data table: its
//! columns, the label of each search suggestion and the toolbar action.
//! Fetching and commands live in [`crate::commands`].

mod coupons;
mod masters;
mod orders;
mod products;
mod reviews;
mod users;

pub use coupons::CouponScreen;
pub use masters::CategoryScreen;
pub use masters::CollectionScreen;
pub use masters::ColorScreen;
pub use masters::SizeScreen;
pub use orders::OrderScreen;
pub use products::ProductScreen;
pub use reviews::ReviewScreen;
pub use users::PartnerScreen;
pub use users::UserScreen;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use storefront_table::Cell;
use storefront_table::ColumnDef;
use storefront_table::DataTable;
use storefront_table::DataTableBuilder;

/// How a resource is shown in the data table.
pub trait Screen: 'static {
    type Row: 'static;

    /// Name used in messages, e.g. `colors`.
    const NAME: &'static str;

    /// Toolbar action label, for screens that can create records.
    const ADD_ACTION: Option<&'static str> = None;

    fn columns() -> Vec<ColumnDef<Self::Row>>;

    fn suggestion_label(row: &Self::Row) -> String;
}

/// A table builder preconfigured for screen `S`.
///
/// Callers add their own suggestion callback before building.
pub fn table_builder<S: Screen>(rows: Vec<S::Row>, page_size: usize) -> DataTableBuilder<S::Row> {
    let builder = DataTable::builder()
        .data(rows)
        .columns(S::columns())
        .default_page_size(page_size)
        .enable_search_dropdown(true)
        .suggestion_label(S::suggestion_label);

    match S::ADD_ACTION {
        Some(label) => builder.action(Cell::text(format!("[+ {}]", label))),
        None => builder,
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Placeholder for a missing value.
pub const NONE: &str = "-";

/// Whole rupees with Indian digit grouping: `₹1,23,456`.
pub fn rupees(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!("{}₹{}", sign, grouped)
}

/// `12 Mar 2024`, or the placeholder.
pub fn date(at: Option<DateTime<Utc>>) -> String {
    at.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| NONE.to_string())
}

/// `12 Mar 2024 14:05 UTC`.
pub fn date_time(at: DateTime<Utc>) -> String {
    at.format("%d %b %Y %H:%M UTC").to_string()
}

/// Non-blank text, or the placeholder.
pub fn or_none(text: Option<&str>) -> &str {
    text.filter(|t| !t.trim().is_empty()).unwrap_or(NONE)
}
