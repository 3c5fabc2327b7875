use crate::error::{Result, ToolError};
use crate::pdf::{merge_documents, PdfDocument};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct MergeReport {
    pub output_path: PathBuf,
    pub files_merged: usize,
    pub total_pages: u32,
}

/// Concatenate every page of every input, in order, into `output`.
///
/// All inputs are loaded before anything is written; a bad input aborts the
/// merge with no file created at `output`.
pub fn merge_files<P: AsRef<Path>, Q: AsRef<Path>>(
    inputs: &[P],
    output: Q,
) -> Result<MergeReport> {
    if inputs.is_empty() {
        return Err(ToolError::NoFilesSelected);
    }
    let output = output.as_ref();

    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        documents.push(PdfDocument::open(input)?.doc);
    }

    let mut merged = merge_documents(documents)?;
    let total_pages = merged.get_pages().len() as u32;
    PdfDocument::save(&mut merged, output)?;

    tracing::info!(
        files = inputs.len(),
        pages = total_pages,
        output = %output.display(),
        "merged PDFs"
    );

    Ok(MergeReport {
        output_path: output.to_path_buf(),
        files_merged: inputs.len(),
        total_pages,
    })
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(inputs: &[P], output: Q) -> anyhow::Result<()> {
    let report = merge_files(inputs, output)?;

    println!(
        "Merged {} files ({} pages) into {}",
        report.files_merged,
        report.total_pages,
        report.output_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testing::{page_markers, write_sample_pdf};
    use tempfile::TempDir;

    #[test]
    fn test_merge_files() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", "A", 2);
        let b = write_sample_pdf(dir.path(), "b.pdf", "B", 3);
        let out = dir.path().join("merged.pdf");

        let report = merge_files(&[&b, &a], &out).unwrap();
        assert_eq!(report.files_merged, 2);
        assert_eq!(report.total_pages, 5);
        assert_eq!(page_markers(&out), vec!["B-1", "B-2", "B-3", "A-1", "A-2"]);
    }

    #[test]
    fn test_merge_output_splits_back_to_same_pages() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", "A", 1);
        let b = write_sample_pdf(dir.path(), "b.pdf", "B", 2);
        let out = dir.path().join("merged.pdf");
        merge_files(&[&a, &b], &out).unwrap();

        let doc = PdfDocument::open(&out).unwrap();
        let whole = crate::page_range::PageRange {
            start: 0,
            end: doc.page_count(),
        };
        let mut copy = doc.extract_range(whole).unwrap();
        let copy_path = dir.path().join("copy.pdf");
        PdfDocument::save(&mut copy, &copy_path).unwrap();

        assert_eq!(page_markers(&copy_path), page_markers(&out));
    }

    #[test]
    fn test_merge_nothing_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("merged.pdf");
        let inputs: Vec<PathBuf> = Vec::new();

        let err = merge_files(&inputs, &out).err().unwrap();
        assert!(matches!(err, ToolError::NoFilesSelected));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_merge_bad_input_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", "A", 2);
        let bogus = dir.path().join("bogus.pdf");
        std::fs::write(&bogus, b"not a pdf at all").unwrap();
        let out = dir.path().join("merged.pdf");

        let err = merge_files(&[&a, &bogus], &out).err().unwrap();
        match err {
            ToolError::Unreadable { path, .. } => assert_eq!(path, bogus),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());
    }
}
