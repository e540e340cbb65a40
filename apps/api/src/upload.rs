//! Multipart upload handling shared by the resume and hunt endpoints.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::extract::Multipart;
use bytes::Bytes;
use tempfile::TempDir;
use tracing::debug;

use crate::errors::AppError;

/// Multipart field carrying the resume PDF.
pub const RESUME_FIELD: &str = "resume";
const DEFAULT_RESUME_NAME: &str = "resume.pdf";

/// A resume written to a private temp directory. Deleted on drop.
pub struct UploadedResume {
    _dir: TempDir,
    path: PathBuf,
}

impl UploadedResume {
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(file_name: Option<&str>, bytes: &Bytes) -> Result<Self, AppError> {
        let dir = tempfile::tempdir().context("Failed to create temp dir for resume")?;
        // Keep only the final path component of the client-supplied name.
        let name = file_name
            .and_then(|n| Path::new(n).file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_RESUME_NAME.to_string());
        let path = dir.path().join(name);

        tokio::fs::write(&path, bytes)
            .await
            .context("Failed to write resume file")?;

        debug!("Stored {} byte resume at {}", bytes.len(), path.display());
        Ok(Self { _dir: dir, path })
    }
}

/// The resume (if any) plus every text field of the form.
pub struct UploadForm {
    pub resume: Option<UploadedResume>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Non-blank text field value.
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

pub async fn read_upload(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm {
        resume: None,
        fields: HashMap::new(),
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let file_name = field.file_name().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
            if !bytes.is_empty() {
                form.resume = Some(UploadedResume::write(file_name.as_deref(), &bytes).await?);
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resume_written_under_client_name_and_removed_on_drop() {
        let bytes = Bytes::from_static(b"%PDF-1.4");
        let upload = UploadedResume::write(Some("../../etc/Jane Doe CV.pdf"), &bytes)
            .await
            .unwrap();
        let path = upload.path().to_path_buf();

        assert_eq!(path.file_name().unwrap(), "Jane Doe CV.pdf");
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");

        drop(upload);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_resume_default_name() {
        let upload = UploadedResume::write(None, &Bytes::from_static(b"x"))
            .await
            .unwrap();
        assert_eq!(
            upload.path().file_name().unwrap(),
            DEFAULT_RESUME_NAME
        );
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let form = UploadForm {
            resume: None,
            fields: HashMap::from([
                ("location".to_string(), " Pune ".to_string()),
                ("role".to_string(), "  ".to_string()),
            ]),
        };
        assert_eq!(form.field("location").as_deref(), Some("Pune"));
        assert!(form.field("role").is_none());
        assert!(form.field("missing").is_none());
    }
}
