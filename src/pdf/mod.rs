pub mod document;
pub mod merge;

pub use document::PdfDocument;
pub use merge::merge_documents;
