//! Suggestion dropdown.

use log::debug;

use super::state::DataTable;

/// One entry of the suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Index of the suggested row in the table's data.
    pub row_index: usize,
    /// Label built by the caller's suggestion label function.
    pub label: String,
}

impl<T> DataTable<T> {
    /// Current suggestions: the first matches in data order, up to the
    /// suggestion limit. Empty while the dropdown is closed.
    ///
    /// Suggestions ignore pagination; a match on page three is suggested
    /// just like one on page one.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        if !self.suggestions_open() {
            return Vec::new();
        }
        let Some(label) = &self.suggestion_label else {
            return Vec::new();
        };

        self.filtered
            .iter()
            .take(self.suggestion_limit)
            .map(|&row_index| Suggestion {
                row_index,
                label: label(&self.rows[row_index]),
            })
            .collect()
    }

    /// Choose the suggestion at `position` in the dropdown.
    ///
    /// Fires the selection callback once with the chosen row, closes the
    /// dropdown and returns the row. Returns `None` (and fires nothing) if the
    /// dropdown is closed or `position` is past the last suggestion.
    pub fn select_suggestion(&mut self, position: usize) -> Option<&T> {
        if !self.suggestions_open() {
            return None;
        }
        let row_index = self
            .filtered
            .iter()
            .take(self.suggestion_limit)
            .nth(position)
            .copied()?;

        self.search_focused = false;
        debug!("Suggestion {} selected (row {})", position, row_index);

        if let Some(on_select) = self.on_suggestion_select.as_mut() {
            on_select(&self.rows[row_index]);
        }
        self.rows.get(row_index)
    }
}
