//! Reading lesson content from JSON, with the trial-division check applied.

use std::path::Path;

use lesson_core::model::LessonContent;

use crate::error::ContentLoadError;

/// Parse and validate content from a JSON string.
///
/// # Errors
///
/// Returns `ContentLoadError::Json` for malformed input and
/// `ContentLoadError::Invalid` when any entry fails the primality check.
pub fn parse_content(json: &str) -> Result<LessonContent, ContentLoadError> {
    let content: LessonContent = serde_json::from_str(json)?;
    check_content(&content)?;
    Ok(content)
}

/// Read, parse and validate a content file.
///
/// # Errors
///
/// Returns `ContentLoadError::Io` if the file cannot be read, otherwise the
/// errors of `parse_content`.
pub fn load_content_file(path: &Path) -> Result<LessonContent, ContentLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = parse_content(&raw)?;
    tracing::info!(
        path = %path.display(),
        quiz_items = content.quiz.len(),
        "loaded lesson content"
    );
    Ok(content)
}

/// # Errors
///
/// Returns `ContentLoadError::Invalid` listing every problem found.
pub fn check_content(content: &LessonContent) -> Result<(), ContentLoadError> {
    let problems = content.problems();
    if problems.is_empty() {
        return Ok(());
    }
    for problem in &problems {
        tracing::warn!(%problem, "lesson content problem");
    }
    Err(ContentLoadError::Invalid { problems })
}
