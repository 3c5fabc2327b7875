use crate::error::{Result, ToolError};
use crate::page_range::PageRange;
use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = Document::load(&path).map_err(|source| ToolError::Unreadable {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), pages = doc.get_pages().len(), "loaded PDF");
        Ok(PdfDocument { doc, path })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy a contiguous range of pages into a new document
    pub fn extract_range(&self, range: PageRange) -> Result<Document> {
        let total = self.page_count();
        if range.start >= range.end || range.end > total {
            return Err(ToolError::InvalidPageNumbers { page_count: total });
        }

        let mut new_doc = self.doc.clone();

        let pages_to_delete: Vec<u32> = (1..=total)
            .filter(|page| *page <= range.start || *page > range.end)
            .collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        new_doc.prune_objects();

        Ok(new_doc)
    }

    /// Save to a file.
    ///
    /// The document is written to a temporary file next to `path` and renamed
    /// into place once fully written, so a failure never leaves a truncated
    /// PDF at `path`. An existing file at `path` is replaced. The new file
    /// gets the usual mode for created files (0666 less the umask) rather
    /// than the private mode of a temporary file.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let write_err = |source| ToolError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir).map_err(write_err)?;
        doc.save_to(&mut tmp)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;

        tracing::debug!(path = %path.display(), "saved PDF");
        Ok(())
    }
}
