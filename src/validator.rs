//! Long-text length validation over the persisted catalog
//!
//! Walks every record of the persisted document and flags those whose
//! description exceeds the configured character threshold. The scan never
//! aborts on a bad record — missing or non-string fields read as empty, and
//! over-length records are collected into a report rather than raised.

use crate::catalog::{FIELD_DESCRIPTION, FIELD_PRODUCT_ID, FIELD_PRODUCT_NAME, str_field};
use crate::config::Config;
use crate::error::Result;
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

/// Pattern matching inline base64 image tags embedded in description HTML,
/// e.g. `<img alt="" src="data:image/png;base64,...">`
const IMAGE_TAG_PATTERN: &str = r#"<img[^>]*src="data:image[^"]*"[^>]*>"#;

#[allow(clippy::expect_used)]
fn image_tag_regex() -> &'static Regex {
    static IMAGE_TAG: OnceLock<Regex> = OnceLock::new();
    IMAGE_TAG
        .get_or_init(|| Regex::new(IMAGE_TAG_PATTERN).expect("image tag pattern is a valid regex"))
}

/// Remove inline base64 image tags from a description
///
/// Only applied when `strip_image_tags` is enabled in [`Config`]; embedded
/// images can dominate the character count without carrying any text the
/// downstream consumer renders.
pub fn strip_image_tags(description: &str) -> String {
    image_tag_regex().replace_all(description, "").into_owned()
}

/// A record whose long-text field exceeded the length threshold
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverLengthRecord {
    /// The record's `product_id` (empty if the field was absent)
    pub product_id: String,
    /// The record's `product_name` (empty if the field was absent)
    pub product_name: String,
    /// Character length of the long-text field as checked
    pub length: usize,
}

impl OverLengthRecord {
    /// The `product_id;product_name` line printed for this record
    pub fn report_line(&self) -> String {
        format!("{};{}", self.product_id, self.product_name)
    }
}

/// Outcome of a validation pass over the persisted document
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    /// Records whose long-text field exceeded the threshold, in document order
    pub over_length: Vec<OverLengthRecord>,
    /// Number of records scanned (zero for a non-array root)
    pub scanned: usize,
}

impl ValidationReport {
    /// Number of over-length records found
    pub fn over_length_count(&self) -> usize {
        self.over_length.len()
    }
}

/// Validate every record of a parsed document against the configured
/// description length threshold
///
/// The comparison is strict: a description of exactly
/// `config.max_description_len` characters passes. Lengths are counted in
/// Unicode scalar values. A non-array root yields an empty report with a
/// warning, matching the counter's unexpected-format handling.
pub fn validate_document(document: &Value, config: &Config) -> ValidationReport {
    let Some(records) = document.as_array() else {
        warn!("unexpected JSON format: root is not an array");
        return ValidationReport::default();
    };

    let mut report = ValidationReport {
        scanned: records.len(),
        ..Default::default()
    };

    for record in records {
        let description = str_field(record, FIELD_DESCRIPTION);

        let length = if config.strip_image_tags {
            strip_image_tags(description).chars().count()
        } else {
            description.chars().count()
        };

        if length > config.max_description_len {
            let entry = OverLengthRecord {
                product_id: str_field(record, FIELD_PRODUCT_ID).to_string(),
                product_name: str_field(record, FIELD_PRODUCT_NAME).to_string(),
                length,
            };
            warn!(
                product_id = %entry.product_id,
                length,
                threshold = config.max_description_len,
                "description exceeds length threshold"
            );
            report.over_length.push(entry);
        }
    }

    report
}

/// Validate the persisted file at `path`
pub async fn validate_file(path: &Path, config: &Config) -> Result<ValidationReport> {
    let document = crate::catalog::load_document(path).await?;
    Ok(validate_document(&document, config))
}
