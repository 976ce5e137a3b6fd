//! The `{ success, message, data }` response envelope.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::error::Error;

/// Every storefront endpoint wraps its payload in this envelope.
///
/// `data` is kept as raw JSON until the caller says what it expects, so that
/// nullable payloads (`data: null`) and failures without `data` both parse.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    /// Parse an envelope from a response body.
    ///
    /// An empty body counts as a successful envelope with no data.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        if body.trim().is_empty() {
            return Ok(Self {
                success: true,
                message: None,
                data: serde_json::Value::Null,
            });
        }
        serde_json::from_str(body).map_err(|e| ApiError::parse_with_body(e.to_string(), body))
    }

    /// Server message, when present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Unwrap the payload.
    ///
    /// `success: false` becomes [`Error::Rejected`] carrying the server
    /// message, or `fallback` when the server sent none.
    pub fn into_data<T: DeserializeOwned>(self, fallback: &str) -> Result<T, Error> {
        if !self.success {
            let message = self.message().unwrap_or(fallback).to_string();
            return Err(Error::Rejected { message });
        }
        serde_json::from_value(self.data)
            .map_err(|e| Error::Api(ApiError::parse(format!("Unexpected payload: {}", e))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_without_message_uses_fallback() {
        let envelope = Envelope::from_body(r#"{"success":false}"#).unwrap();
        let err = envelope.into_data::<serde_json::Value>("Color API error.").unwrap_err();
        assert_eq!(err.to_string(), "Color API error.");
    }

    #[test]
    fn blank_message_uses_fallback() {
        let envelope = Envelope::from_body(r#"{"success":false,"message":"  "}"#).unwrap();
        let err = envelope.into_data::<serde_json::Value>("Size API error.").unwrap_err();
        assert_eq!(err.to_string(), "Size API error.");
    }

    #[test]
    fn null_data_is_none() {
        let envelope = Envelope::from_body(r#"{"success":true,"data":null}"#).unwrap();
        let data: Option<u32> = envelope.into_data("x").unwrap();
        assert_eq!(data, None);
    }

    #[test]
    fn garbage_is_parse_error() {
        let err = Envelope::from_body("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Parse { body: Some(_), .. }));
    }
}
