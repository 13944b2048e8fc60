// ============================================================================
// UPLOAD DRAFT - state of the "Upload Excel File" dialog
// ============================================================================

use crate::models::UploadFile;
use crate::utils::messages;

/// Exists while the upload dialog is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadDraft {
    pub selected: Option<UploadFile>,
    pub error: Option<String>,
}

impl UploadDraft {
    /// Stages `file` when it is a spreadsheet, otherwise records why not.
    /// `None` means the picker was emptied.
    pub fn select(&mut self, file: Option<UploadFile>) {
        match file {
            Some(file) if file.is_spreadsheet() => {
                log::info!("📎 Staged {} ({}, {} bytes)", file.name, file.mime_type, file.size());
                self.selected = Some(file);
                self.error = None;
            }
            Some(file) => {
                log::warn!("⚠️ Rejected {} with type {:?}", file.name, file.mime_type);
                self.selected = None;
                self.error = Some(messages::ONLY_EXCEL.to_string());
            }
            None => {
                self.selected = None;
            }
        }
    }

    /// File ready for submission, or the message to show instead.
    pub fn staged(&self) -> Result<&UploadFile, &'static str> {
        self.selected.as_ref().ok_or(messages::SELECT_FILE)
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SPREADSHEET_MIME_TYPES;

    fn file(mime: &str) -> UploadFile {
        UploadFile::from_bytes("import.xlsx", mime, vec![1, 2, 3])
    }

    #[test]
    fn rejects_every_non_spreadsheet_type() {
        for mime in ["text/csv", "application/pdf", "image/png", "", "application/zip"] {
            let mut draft = UploadDraft {
                selected: Some(file(SPREADSHEET_MIME_TYPES[0])),
                error: None,
            };
            draft.select(Some(file(mime)));
            assert_eq!(draft.selected, None);
            assert_eq!(draft.error.as_deref(), Some(messages::ONLY_EXCEL));
        }
    }

    #[test]
    fn stages_spreadsheets_and_clears_previous_error() {
        for mime in SPREADSHEET_MIME_TYPES {
            let mut draft = UploadDraft::default();
            draft.select(Some(file("text/plain")));
            assert!(draft.error.is_some());

            draft.select(Some(file(mime)));
            assert_eq!(draft.selected, Some(file(mime)));
            assert_eq!(draft.error, None);
        }
    }

    #[test]
    fn missing_file_is_reported_on_submit() {
        let draft = UploadDraft::default();
        assert_eq!(draft.staged(), Err(messages::SELECT_FILE));
    }

    #[test]
    fn emptied_picker_clears_the_staged_file() {
        let mut draft = UploadDraft::default();
        draft.select(Some(file(SPREADSHEET_MIME_TYPES[1])));
        draft.select(None);
        assert_eq!(draft.selected, None);
        assert_eq!(draft.error, None);
    }
}
