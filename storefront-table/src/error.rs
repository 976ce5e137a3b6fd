//! Table configuration errors.

/// Mistakes in how a table was set up.
///
/// These are integration errors made by the screen author and are reported
/// when the table is built. Data problems never produce an error; they show
/// up as an empty or clamped view instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No column descriptors were given.
    #[error("table needs at least one column")]
    EmptyColumns,

    /// Two columns share the same key.
    #[error("duplicate column key '{key}'")]
    DuplicateColumnKey { key: String },

    /// The page size was zero.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// The search dropdown was enabled without a way to label suggestions.
    #[error("search dropdown is enabled but no suggestion label builder was given")]
    MissingSuggestionLabel,
}
