//! Resume text extraction: wraps `pdf-extract` on the blocking pool.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading PDF: extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Error reading PDF: no extractable text found")]
    Empty,
}

/// Extracts plain text from the PDF at `path`.
///
/// `pdf-extract` is synchronous and may panic on malformed input, so it runs
/// under `spawn_blocking`; a panic surfaces as `ExtractError::Task`.
pub async fn extract_resume_text(path: &Path) -> Result<String, ExtractError> {
    let owned = path.to_path_buf();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned))
        .await?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }

    debug!(
        "Extracted {} characters from {}",
        text.len(),
        path.display()
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = extract_resume_text(Path::new("/nonexistent/resume.pdf")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_non_pdf_content_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let err = extract_resume_text(file.path()).await.unwrap_err();
        assert!(err.to_string().starts_with("Error reading PDF"));
    }
}
