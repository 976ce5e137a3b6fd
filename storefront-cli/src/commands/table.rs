//! Table actions shared by every screen: list, suggest and show.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use log::info;
use storefront_table::Alignment;
use storefront_table::ColumnDef;
use storefront_table::DataTable;
use storefront_table::TextOptions;
use storefront_table::render_text_with;
use storefront_table::text::display_width;
use storefront_table::text::pad_to_width;

use crate::args::Action;
use crate::args::ListArgs;
use crate::error::CliError;
use crate::screens::Screen;
use crate::screens::table_builder;

/// Run a table action over already fetched rows.
pub fn run<S: Screen>(rows: Vec<S::Row>, action: Action, page_size: usize) -> Result<String, CliError> {
    match action {
        Action::List(args) => list::<S>(rows, &args, page_size),
        Action::Suggest { query } => suggest::<S>(rows, &query, page_size),
        Action::Show { query } => show::<S>(rows, &query, page_size),
        Action::Delete { .. } => Err(CliError::Unsupported {
            screen: S::NAME,
            action: "delete",
        }),
    }
}

fn text_options<S: Screen>() -> TextOptions {
    TextOptions {
        search_placeholder: format!("Search {}...", S::NAME),
        ..TextOptions::default()
    }
}

/// One page of the table, optionally filtered.
pub fn list<S: Screen>(
    rows: Vec<S::Row>,
    args: &ListArgs,
    default_page_size: usize,
) -> Result<String, CliError> {
    let page_size = args
        .page_size
        .map_or(default_page_size, |size| usize::try_from(size).unwrap_or(usize::MAX));
    let mut table = table_builder::<S>(rows, page_size).build()?;

    if let Some(query) = &args.search {
        table.set_query(query.clone());
    }
    // Pages are 1-based on the command line; out of range pages clamp.
    table.set_page(args.page.saturating_sub(1));

    debug!(
        "Listing {}: page {} of {}, {} of {} rows match",
        S::NAME,
        table.current_page() + 1,
        table.page_count(),
        table.filtered_count(),
        table.total_count()
    );
    Ok(render_text_with(&table.view(), &text_options::<S>()))
}

fn searching<S: Screen>(
    rows: Vec<S::Row>,
    query: &str,
    page_size: usize,
    on_select: impl FnMut(&S::Row) + 'static,
) -> Result<DataTable<S::Row>, CliError> {
    let mut table = table_builder::<S>(rows, page_size)
        .on_suggestion_select(on_select)
        .build()?;
    table.focus_search();
    table.set_query(query);
    Ok(table)
}

/// Suggestion labels for `query`, one per line.
pub fn suggest<S: Screen>(rows: Vec<S::Row>, query: &str, page_size: usize) -> Result<String, CliError> {
    let table = searching::<S>(rows, query, page_size, |_| {})?;
    let labels: Vec<String> = table.suggestions().into_iter().map(|s| s.label).collect();

    if labels.is_empty() {
        Ok(format!("No {} match '{}'.", S::NAME, query))
    } else {
        Ok(labels.join("\n"))
    }
}

/// Detail of the first suggested row for `query`.
pub fn show<S: Screen>(rows: Vec<S::Row>, query: &str, page_size: usize) -> Result<String, CliError> {
    let opened: Rc<RefCell<Option<String>>> = Rc::default();
    let sink = Rc::clone(&opened);

    let mut table = searching::<S>(rows, query, page_size, move |row: &S::Row| {
        info!("Opening {} record {}", S::NAME, S::suggestion_label(row));
        *sink.borrow_mut() = Some(detail(&S::columns(), row));
    })?;
    table.select_suggestion(0);

    let detail = opened.borrow_mut().take();
    detail.ok_or_else(|| CliError::NotFound {
        query: query.to_string(),
    })
}

/// Every column of one row, one field per line.
pub fn detail<T>(columns: &[ColumnDef<T>], row: &T) -> String {
    let width = columns
        .iter()
        .map(|c| display_width(c.header()))
        .max()
        .unwrap_or(0);

    let mut out = Vec::new();
    for column in columns {
        for (i, line) in column.render(row).lines().into_iter().enumerate() {
            let header = if i == 0 { column.header() } else { "" };
            let value = if i == 0 && line.is_empty() {
                "-".to_string()
            } else {
                line
            };
            let entry = format!("{}  {}", pad_to_width(header, width, Alignment::Left), value);
            out.push(entry.trim_end().to_string());
        }
    }
    out.join("\n")
}
