use crate::error::ApiError;
use crate::models::resume::Resume;

const NO_FILE_MESSAGE: &str = "Please select a PDF resume to upload.";

/// A file the user picked, read into memory so the flow stays testable off
/// the DOM. The component reads the browser `File` into bytes before
/// handing it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Only `application/pdf` is accepted. Some browsers report no type at
    /// all for dragged files; fall back to the extension in that case.
    pub fn is_pdf(&self) -> bool {
        self.content_type.eq_ignore_ascii_case("application/pdf")
            || (self.content_type.is_empty() && self.name.to_ascii_lowercase().ends_with(".pdf"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Empty,
    Ready,
    Uploading,
    Succeeded,
    Failed,
}

/// Upload form state machine: Empty -> Ready -> Uploading -> Succeeded or
/// Failed. A failed upload keeps the file so retry needs no reselection;
/// at most one request is in flight per form instance.
#[derive(Debug, Clone)]
pub struct UploadFlow {
    file: Option<SelectedFile>,
    phase: UploadPhase,
    error: Option<String>,
    uploaded: Option<Resume>,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadFlow {
    pub fn new() -> Self {
        Self {
            file: None,
            phase: UploadPhase::Empty,
            error: None,
            uploaded: None,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.name.as_str())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The record from the last successful upload, for the summary panel.
    pub fn uploaded(&self) -> Option<&Resume> {
        self.uploaded.as_ref()
    }

    /// Record a new selection. Non-PDF files are rejected here, before any
    /// request exists; the previous selection is kept in that case.
    pub fn select_file(&mut self, file: SelectedFile) {
        if self.phase == UploadPhase::Uploading {
            return;
        }
        if !file.is_pdf() {
            self.error = Some(format!("\"{}\" is not a PDF file.", file.name));
            return;
        }
        self.file = Some(file);
        self.phase = UploadPhase::Ready;
        self.error = None;
        self.uploaded = None;
    }

    /// Record a selection that could not be read from the browser.
    pub fn selection_failed(&mut self, message: String) {
        if self.phase != UploadPhase::Uploading {
            self.error = Some(message);
        }
    }

    /// Explicitly drop the current selection.
    pub fn clear_file(&mut self) {
        if self.phase == UploadPhase::Uploading {
            return;
        }
        self.file = None;
        self.phase = UploadPhase::Empty;
        self.error = None;
    }

    /// Gate a submission. Returns the file to send, or `None` when there is
    /// nothing to send: no selection (a validation error is recorded) or an
    /// upload already in flight.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        if self.phase == UploadPhase::Uploading {
            return None;
        }
        match self.file.clone() {
            Some(file) => {
                self.phase = UploadPhase::Uploading;
                self.error = None;
                Some(file)
            }
            None => {
                self.error = Some(NO_FILE_MESSAGE.to_string());
                None
            }
        }
    }

    /// Resolve the in-flight request. On success the new record is returned
    /// exactly once, for the caller to report upward, and the selection is
    /// cleared. On failure the file stays selected and the error is kept
    /// until the next selection or retry.
    pub fn finish(&mut self, result: Result<Resume, ApiError>) -> Option<Resume> {
        if self.phase != UploadPhase::Uploading {
            return None;
        }
        match result {
            Ok(resume) => {
                self.phase = UploadPhase::Succeeded;
                self.file = None;
                self.uploaded = Some(resume.clone());
                Some(resume)
            }
            Err(err) => {
                self.phase = UploadPhase::Failed;
                self.error = Some(err.to_string());
                None
            }
        }
    }
}
