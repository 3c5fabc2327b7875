use crate::error::Result;
use crate::pdf::PdfDocument;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DocumentSummary {
    pub path: PathBuf,
    pub file_name: String,
    pub page_count: u32,
}

impl DocumentSummary {
    pub fn of(doc: &PdfDocument) -> Self {
        DocumentSummary {
            path: doc.path.clone(),
            file_name: display_name(&doc.path),
            page_count: doc.page_count(),
        }
    }
}

/// Base name of a path for display, falling back to the whole path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn summarize<P: AsRef<Path>>(path: P) -> Result<DocumentSummary> {
    let doc = PdfDocument::open(path)?;
    Ok(DocumentSummary::of(&doc))
}

pub fn run<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let summary = summarize(&path)?;

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", summary.page_count);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testing::write_sample_pdf;
    use tempfile::TempDir;

    #[test]
    fn test_summarize() {
        let dir = TempDir::new().unwrap();
        let path = write_sample_pdf(dir.path(), "report.pdf", "R", 7);
        let summary = summarize(&path).unwrap();
        assert_eq!(summary.file_name, "report.pdf");
        assert_eq!(summary.page_count, 7);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/b/c.pdf")), "c.pdf");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
