use crate::error::{Result, ToolError};
use crate::page_range::{partition, PageRange, SplitPoints};
use crate::pdf::PdfDocument;
use std::path::{Path, PathBuf};

const SPLIT_DIR_SUFFIX: &str = "_split";

#[derive(Debug, Clone)]
pub struct SplitReport {
    pub output_dir: PathBuf,
    pub parts: Vec<PathBuf>,
}

/// Validate split point text and turn it into the page ranges to write
pub fn plan(points: &str, page_count: u32) -> Result<Vec<PageRange>> {
    let points = SplitPoints::parse(points, page_count)?;
    Ok(partition(page_count, &points))
}

/// Directory the parts land in: `dir/name.pdf` becomes `dir/name_split`
pub fn output_dir<P: AsRef<Path>>(output: P) -> Result<PathBuf> {
    let output = output.as_ref();
    let invalid = || ToolError::InvalidOutputPath {
        path: output.to_path_buf(),
    };
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(invalid)?;

    let parent = output.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(format!("{}{}", stem, SPLIT_DIR_SUFFIX)))
}

/// Write one `part_N.pdf` per range into `dir`, creating it if needed.
///
/// Parts left over from an earlier run with the same names are overwritten.
pub fn write_parts<P: AsRef<Path>>(
    doc: &PdfDocument,
    ranges: &[PageRange],
    dir: P,
) -> Result<SplitReport> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ToolError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut parts = Vec::with_capacity(ranges.len());
    for (i, range) in ranges.iter().enumerate() {
        let part_path = dir.join(format!("part_{}.pdf", i + 1));

        let mut part = doc.extract_range(*range)?;
        PdfDocument::save(&mut part, &part_path)?;
        tracing::debug!(
            part = i + 1,
            pages = range.len(),
            path = %part_path.display(),
            "wrote split part"
        );

        parts.push(part_path);
    }

    tracing::info!(
        source = %doc.path.display(),
        parts = parts.len(),
        dir = %dir.display(),
        "split PDF"
    );

    Ok(SplitReport {
        output_dir: dir.to_path_buf(),
        parts,
    })
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    points: &str,
    output: Q,
) -> anyhow::Result<()> {
    let doc = PdfDocument::open(input)?;
    let ranges = plan(points, doc.page_count())?;
    let dir = output_dir(output)?;

    let report = write_parts(&doc, &ranges, dir)?;

    println!(
        "Split {} pages into {} parts in {}",
        doc.page_count(),
        report.parts.len(),
        report.output_dir.display()
    );

    Ok(())
}
