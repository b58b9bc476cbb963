//! Catalog document parsing and record counting
//!
//! The persisted file is re-read and fully parsed each time it is needed —
//! once for counting, once for validation — mirroring the fact that the file
//! on disk, not any in-memory value, is the source of truth for a run.

use crate::error::Result;
use serde_json::Value;
use std::path::Path;

/// Record field holding the product identifier
pub const FIELD_PRODUCT_ID: &str = "product_id";

/// Record field holding the product name
pub const FIELD_PRODUCT_NAME: &str = "product_name";

/// Record field holding the long-text description checked against the
/// configured length threshold
pub const FIELD_DESCRIPTION: &str = "l_description";

/// Read and parse the persisted document from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not valid
/// JSON. A parseable document with an unexpected root shape is NOT an error;
/// shape handling is the caller's concern.
pub async fn load_document(path: &Path) -> Result<Value> {
    let content = tokio::fs::read(path).await?;
    let document = serde_json::from_slice(&content)?;
    Ok(document)
}

/// Count the records in a parsed document
///
/// Returns the element count when the root is an array. Any other root shape
/// is reported as an unexpected format and counts as zero records; element
/// shape is not validated.
pub fn count_records(document: &Value) -> usize {
    match document.as_array() {
        Some(records) => records.len(),
        None => {
            tracing::warn!("unexpected JSON format: root is not an array");
            0
        }
    }
}

/// Count the records in the persisted file at `path`
pub async fn count_records_in_file(path: &Path) -> Result<usize> {
    let document = load_document(path).await?;
    Ok(count_records(&document))
}

/// Read a string field from a record, treating absent or non-string values
/// as empty
pub(crate) fn str_field<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}
