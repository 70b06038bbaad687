//! Pure input checks. No I/O and no hidden state; these run before any
//! store access so malformed requests never touch storage.

use crate::errors::AppError;

/// Minimum length for titles, author names, slide topics and bodies.
pub const MIN_TEXT_LEN: usize = 3;

/// Validate a presentation title: at least 3 characters.
pub fn validate_title(title: &str) -> Option<String> {
    if title.len() < MIN_TEXT_LEN {
        return Some(format!("Title must be at least {MIN_TEXT_LEN} characters"));
    }
    None
}

/// Validate an author list: at least one author, each at least 3 characters.
pub fn validate_authors(authors: &[String]) -> Option<String> {
    if authors.is_empty() {
        return Some("At least one author is required".to_string());
    }
    if authors.iter().any(|a| a.len() < MIN_TEXT_LEN) {
        return Some(format!(
            "Author names must be at least {MIN_TEXT_LEN} characters"
        ));
    }
    None
}

/// Validate a required slide field with a minimum length.
fn validate_min_len(value: &str, field_name: &str) -> Option<String> {
    if value.len() < MIN_TEXT_LEN {
        return Some(format!(
            "{field_name} must be at least {MIN_TEXT_LEN} characters"
        ));
    }
    None
}

/// Validate the input of a presentation create/update.
pub fn presentation_input(title: &str, authors: &[String]) -> Result<(), AppError> {
    let mut errors = Vec::new();
    errors.extend(validate_title(title));
    errors.extend(validate_authors(authors));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Validate the input of a slide append/replace.
pub fn slide_input(topic: &str, body: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();
    errors.extend(validate_min_len(topic, "Topic"));
    errors.extend(validate_min_len(body, "Body"));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Parse a raw slide index and check it against the current list length.
/// The length comes from the freshly loaded parent, never from a cached
/// value, since the list can shrink between request and execution.
pub fn slide_index(raw: &str, len: usize) -> Result<usize, AppError> {
    let index: usize = raw.parse().map_err(|_| AppError::Index)?;
    if index >= len {
        return Err(AppError::Index);
    }
    Ok(index)
}
