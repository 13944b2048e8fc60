// ============================================================================
// UPLOAD FILE - a spreadsheet picked for bulk import
// ============================================================================

use crate::error::ApiError;
use crate::models::Notification;
use crate::utils::messages;

/// MIME types accepted for bulk import.
pub const SPREADSHEET_MIME_TYPES: [&str; 2] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
];

#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    /// File picked through an `<input type="file">`.
    Browser(web_sys::File),
    /// Content already in memory.
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub source: FileSource,
}

impl UploadFile {
    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            source: FileSource::Browser(file),
        }
    }

    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn is_spreadsheet(&self) -> bool {
        SPREADSHEET_MIME_TYPES.contains(&self.mime_type.as_str())
    }

    /// Size in bytes, when known without reading the file.
    pub fn size(&self) -> u64 {
        match &self.source {
            FileSource::Browser(file) => file.size() as u64,
            FileSource::Bytes(bytes) => bytes.len() as u64,
        }
    }
}

/// Result of submitting a staged file.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The server answered 200.
    Uploaded,
    /// The server answered with any other status.
    Rejected { status: u16 },
    /// No usable response.
    Failed(ApiError),
}

impl UploadOutcome {
    pub fn from_status(status: u16) -> Self {
        if status == 200 {
            UploadOutcome::Uploaded
        } else {
            UploadOutcome::Rejected { status }
        }
    }

    /// Inline message kept in the dialog, if the dialog stays open.
    pub fn dialog_error(&self) -> Option<&'static str> {
        match self {
            UploadOutcome::Uploaded => None,
            UploadOutcome::Rejected { .. } => Some(messages::UPLOAD_REJECTED),
            UploadOutcome::Failed(_) => Some(messages::UPLOAD_ERROR),
        }
    }

    pub fn notification(&self) -> Option<Notification> {
        match self {
            UploadOutcome::Uploaded => Some(Notification::success(messages::UPLOAD_SUCCESS)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_excel_mime_types_are_spreadsheets() {
        for mime in SPREADSHEET_MIME_TYPES {
            assert!(UploadFile::from_bytes("a", mime, vec![]).is_spreadsheet());
        }
        for mime in ["text/csv", "application/pdf", "", "application/vnd.ms-excel; charset=x"] {
            assert!(!UploadFile::from_bytes("a", mime, vec![]).is_spreadsheet());
        }
    }

    #[test]
    fn only_status_200_counts_as_uploaded() {
        assert_eq!(UploadOutcome::from_status(200), UploadOutcome::Uploaded);
        assert_eq!(UploadOutcome::from_status(201), UploadOutcome::Rejected { status: 201 });
        assert_eq!(UploadOutcome::from_status(204).dialog_error(), Some(messages::UPLOAD_REJECTED));

        let failed = UploadOutcome::Failed(ApiError::Network("offline".into()));
        assert_eq!(failed.dialog_error(), Some(messages::UPLOAD_ERROR));
        assert_eq!(failed.notification(), None);
        assert!(UploadOutcome::Uploaded.notification().is_some());
    }
}
