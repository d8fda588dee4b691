//! Validation of submitted texts before they reach the summary service.

use crate::core::models::TextToSummary;
use crate::errors::SummaryError;

pub const EMPTY_TEXT_MESSAGE: &str =
    "Text cannot be empty. Please provide content to be summarized";

/// Trims `raw` and enforces the minimum length, counted in characters.
///
/// # Errors
///
/// `SummaryError::Validation` for blank or too-short text.
pub fn validate_text(raw: &str, min_length: usize) -> Result<String, SummaryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SummaryError::Validation(EMPTY_TEXT_MESSAGE.to_string()));
    }

    let length = trimmed.chars().count();
    if length < min_length {
        return Err(SummaryError::Validation(format!(
            "Text must be at least {min_length} characters long after trimming (got {length})"
        )));
    }

    Ok(trimmed.to_string())
}

/// Validates every element; the first invalid one rejects the whole batch.
///
/// # Errors
///
/// `SummaryError::Validation` naming the offending index.
pub fn validate_batch(
    items: &[TextToSummary],
    min_length: usize,
) -> Result<Vec<String>, SummaryError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate_text(&item.text_to_process, min_length).map_err(|e| match e {
                SummaryError::Validation(msg) => {
                    SummaryError::Validation(format!("items[{index}]: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}
