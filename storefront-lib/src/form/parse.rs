//! Text-to-value helpers shared by the forms.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;

/// `None` for blank input, otherwise the trimmed text.
pub(super) fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse a decimal amount. Blank input is `Ok(None)`.
pub(super) fn decimal(raw: &str) -> Result<Option<Decimal>, ()> {
    match non_blank(raw) {
        None => Ok(None),
        Some(text) => text.parse::<Decimal>().map(Some).map_err(|_| ()),
    }
}

/// Parse a whole number. Blank input is `Ok(None)`; negative numbers are
/// returned as-is so the caller can report the bound it expects.
pub(super) fn integer(raw: &str) -> Result<Option<i64>, ()> {
    match non_blank(raw) {
        None => Ok(None),
        Some(text) => text.parse::<i64>().map(Some).map_err(|_| ()),
    }
}

/// Parse a date or timestamp: RFC 3339, or a bare `YYYY-MM-DD` taken as
/// midnight UTC. Blank input is `Ok(None)`.
pub(super) fn timestamp(raw: &str) -> Result<Option<DateTime<Utc>>, ()> {
    let Some(text) = non_blank(raw) else {
        return Ok(None);
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(Some(parsed.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or(())
}
