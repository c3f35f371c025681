// src/export/json.rs

use crate::errors::AppResult;
use serde::Serialize;

/// Pretty-printed JSON text.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
