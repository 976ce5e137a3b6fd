//! Event handling for the data table.

use log::warn;

use super::state::DataTable;

/// A discrete user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The search input text changed.
    QueryChanged(String),
    /// The search input was cleared.
    ClearQuery,
    /// The search input gained focus.
    Focus,
    /// The search input lost focus.
    Blur,
    /// A page was clicked (0-indexed).
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// A suggestion was chosen, by its position in the dropdown.
    SelectSuggestion(usize),
    /// A different page size was picked.
    SetPageSize(usize),
}

/// Whether the table acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

impl<T> DataTable<T> {
    /// Apply a user interaction to the table state.
    pub fn handle(&mut self, event: TableEvent) -> EventResult {
        match event {
            TableEvent::QueryChanged(query) => {
                self.set_query(query);
                EventResult::Consumed
            }
            TableEvent::ClearQuery => {
                if self.query().is_empty() {
                    return EventResult::Ignored;
                }
                self.clear_query();
                EventResult::Consumed
            }
            TableEvent::Focus => {
                if !self.has_search_input() {
                    return EventResult::Ignored;
                }
                self.focus_search();
                EventResult::Consumed
            }
            TableEvent::Blur => {
                if !self.search_focused() {
                    return EventResult::Ignored;
                }
                self.blur_search();
                EventResult::Consumed
            }
            TableEvent::GoToPage(page) => {
                self.set_page(page);
                EventResult::Consumed
            }
            TableEvent::NextPage => consumed_if(self.next_page()),
            TableEvent::PrevPage => consumed_if(self.prev_page()),
            TableEvent::SelectSuggestion(position) => {
                consumed_if(self.select_suggestion(position).is_some())
            }
            TableEvent::SetPageSize(size) => match self.set_page_size(size) {
                Ok(()) => EventResult::Consumed,
                Err(e) => {
                    warn!("Ignoring page size change: {}", e);
                    EventResult::Ignored
                }
            },
        }
    }
}

fn consumed_if(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}
