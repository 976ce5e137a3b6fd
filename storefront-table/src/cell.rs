//! Displayable cell content produced by column render functions.

/// Visual emphasis for a piece of cell text.
///
/// The text renderer ignores tones; richer front ends map them to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Strong,
    Muted,
    Success,
    Warning,
    Danger,
    Info,
}

/// Content of a single table cell.
///
/// Cells form a small tree so that render functions can produce the same
/// shapes the dashboard screens use: a bold name with a muted sub-line, a
/// status badge, a few inline fragments.
///
/// # Examples
///
/// ```ignore
/// // Name with the email underneath
/// Cell::stack([Cell::strong(&user.full_name), Cell::muted(&user.email)]);
///
/// // "5 total" on one line
/// Cell::inline([Cell::strong(count.to_string()), Cell::text("total")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Styled {
        text: String,
        tone: Tone,
    },
    /// Children stacked vertically, one display line each.
    Stack(Vec<Cell>),
    /// Children on one line, separated by a single space.
    Inline(Vec<Cell>),
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self::Styled {
            text: text.into(),
            tone,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Strong)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Muted)
    }

    pub fn stack(children: impl IntoIterator<Item = Cell>) -> Self {
        Self::Stack(children.into_iter().collect())
    }

    pub fn inline(children: impl IntoIterator<Item = Cell>) -> Self {
        Self::Inline(children.into_iter().collect())
    }

    /// Returns `true` if the cell has no visible text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) | Self::Styled { text, .. } => text.is_empty(),
            Self::Stack(children) | Self::Inline(children) => children.iter().all(Cell::is_empty),
        }
    }

    /// Flattens the cell to a single line of plain text.
    ///
    /// Non-empty fragments are joined with a single space. This is the text a
    /// searchable column contributes when it has no explicit accessor.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) | Self::Styled { text, .. } => text.clone(),
            Self::Stack(children) | Self::Inline(children) => children
                .iter()
                .map(Cell::plain_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Display lines for this cell. Always returns at least one line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Stack(children) => {
                let lines: Vec<String> = children
                    .iter()
                    .filter(|child| !child.is_empty())
                    .flat_map(Cell::lines)
                    .collect();
                if lines.is_empty() {
                    vec![String::new()]
                } else {
                    lines
                }
            }
            other => vec![other.plain_text()],
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_joins_fragments() {
        let cell = Cell::stack([
            Cell::strong("Black"),
            Cell::Empty,
            Cell::inline([Cell::muted("BLK"), Cell::text("#000000")]),
        ]);
        assert_eq!(cell.plain_text(), "Black BLK #000000");
    }

    #[test]
    fn stack_lines_skip_empty_children() {
        let cell = Cell::stack([Cell::text("a"), Cell::text(""), Cell::text("b")]);
        assert_eq!(cell.lines(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(Cell::Empty.lines(), vec![String::new()]);
    }
}
