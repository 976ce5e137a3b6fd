//! Error type for the admin console.

use std::path::PathBuf;

use storefront_lib::error::ValidationErrors;
use storefront_table::TableError;

use crate::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] storefront_lib::Error),

    #[error("{0}\n{fields}", fields = field_lines(.0))]
    Validation(#[from] ValidationErrors),

    #[error("table setup error: {0}")]
    Table(#[from] TableError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("could not read {}: {message}", path.display())]
    PayloadFile { path: PathBuf, message: String },

    #[error("'{id}' is not a valid id")]
    InvalidId { id: String },

    #[error("nothing matches '{query}'")]
    NotFound { query: String },

    #[error("{screen} does not support {action}")]
    Unsupported {
        screen: &'static str,
        action: &'static str,
    },
}

fn field_lines(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|e| format!("  {}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a numeric record id as typed on the command line.
pub fn parse_id(raw: &str) -> Result<i64, CliError> {
    raw.trim().parse().map_err(|_| CliError::InvalidId {
        id: raw.to_string(),
    })
}
