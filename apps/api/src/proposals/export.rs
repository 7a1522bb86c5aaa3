//! Proposal export. Plain text only; PDF and DOCX are not built yet.

use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;

const DEFAULT_FILENAME: &str = "proposal";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub proposal: String,
    #[serde(default)]
    pub format: ExportFormat,
    pub filename: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExportFile {
    pub content_type: &'static str,
    pub filename: String,
    pub body: Bytes,
}

impl ExportFile {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Keeps filename characters that are safe inside a quoted header value.
pub fn sanitize_filename(filename: Option<&str>) -> String {
    let cleaned: String = filename
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ' | '.'))
        .collect();
    let cleaned = cleaned.trim().trim_matches('.').trim();

    if cleaned.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        cleaned.to_string()
    }
}

pub fn export_proposal(request: ExportRequest) -> Result<ExportFile, AppError> {
    if request.proposal.trim().is_empty() {
        return Err(AppError::Validation("proposal cannot be empty".to_string()));
    }

    match request.format {
        ExportFormat::Txt => Ok(ExportFile {
            content_type: "text/plain; charset=utf-8",
            filename: format!(
                "{}.{}",
                sanitize_filename(request.filename.as_deref()),
                request.format.extension()
            ),
            body: Bytes::from(request.proposal),
        }),
        ExportFormat::Pdf => Err(AppError::NotImplemented("PDF export".to_string())),
        ExportFormat::Docx => Err(AppError::NotImplemented("DOCX export".to_string())),
    }
}
