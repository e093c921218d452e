use crate::db::Row;
use crate::error::VocalisError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Text of `column` in `row`; a missing row, missing column or NULL reads as empty.
pub(crate) fn column_text<'a>(row: Option<&'a Row>, column: &str) -> &'a str {
    row.and_then(|r| r.get(column))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Parse a stored JSON blob. `Ok(None)` means the column is empty and the caller
/// should fall back to defaults; malformed JSON is an error, never a default.
pub(crate) fn decode_blob<T: DeserializeOwned>(
    column: &'static str,
    raw: &str,
) -> Result<Option<T>, VocalisError> {
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(raw)
        .map(Some)
        .map_err(|source| VocalisError::CorruptRecord { column, source })
}
