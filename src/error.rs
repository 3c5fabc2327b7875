use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("No PDF files selected.")]
    NoFilesSelected,

    #[error("Please enter at least one page number.")]
    EmptySplitInput,

    #[error("Please enter valid page numbers (1 to {}).", .page_count.saturating_sub(1))]
    InvalidPageNumbers { page_count: u32 },

    #[error("No PDF loaded. Select a PDF to split first.")]
    NoDocumentLoaded,

    #[error("Not a usable output file name: {}", .path.display())]
    InvalidOutputPath { path: PathBuf },

    #[error("Unreadable or not a valid PDF: {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed PDF structure: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl ToolError {
    /// Errors caused by what the user typed or selected, as opposed to I/O or
    /// PDF format failures.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ToolError::NoFilesSelected
                | ToolError::EmptySplitInput
                | ToolError::InvalidPageNumbers { .. }
                | ToolError::NoDocumentLoaded
                | ToolError::InvalidOutputPath { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
