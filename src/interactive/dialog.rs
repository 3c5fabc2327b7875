use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File type accepted by a chooser, e.g. "PDF Files" / `*.pdf`
#[derive(Debug, Clone, Copy)]
pub struct FileFilter {
    pub name: &'static str,
    pub extension: &'static str,
}

pub const PDF_FILES: FileFilter = FileFilter {
    name: "PDF Files",
    extension: "pdf",
};

impl FileFilter {
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension))
    }
}

/// Choosing files to read and a path to write. An empty result means the
/// user cancelled.
pub trait FileDialog {
    fn choose_files_to_open(&mut self, filter: &FileFilter) -> Vec<PathBuf>;
    fn choose_file_to_open(&mut self, filter: &FileFilter) -> Option<PathBuf>;
    fn choose_file_to_save(
        &mut self,
        filter: &FileFilter,
        default_extension: &str,
    ) -> Option<PathBuf>;
}

pub trait Notifier {
    fn info(&mut self, title: &str, message: &str);
    fn warn(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

/// Everything a view needs from the outside world
pub trait Frontend: FileDialog + Notifier {}

impl<T: FileDialog + Notifier> Frontend for T {}

/// Line-oriented terminal frontend
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        // The terminal is the only place to report a broken terminal
        let _ = write!(self.output, "{}", prompt);
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!("failed to read from terminal: {}", e);
                None
            }
        }
    }

    fn note(&mut self, message: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.output, "  {}", message);
    }

    /// Resolve one typed path against the filter. Directories yield every
    /// matching file beneath them, in path order.
    fn collect_matching(&mut self, path: PathBuf, filter: &FileFilter, into: &mut Vec<PathBuf>) {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(&path)
                .follow_links(true)
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!("skipping unreadable entry: {}", e);
                        None
                    }
                })
                .filter(|entry| entry.file_type().is_file() && filter.matches(entry.path()))
                .map(|entry| entry.into_path())
                .collect();
            found.sort();
            if found.is_empty() {
                self.note(format_args!("no {} in {}", filter.name, path.display()));
            }
            into.extend(found);
        } else if !path.exists() {
            self.note(format_args!("skipping {}: no such file", path.display()));
        } else if !filter.matches(&path) {
            self.note(format_args!(
                "skipping {}: not one of {} (*.{})",
                path.display(),
                filter.name,
                filter.extension
            ));
        } else {
            into.push(path);
        }
    }
}

impl<R: BufRead, W: Write> FileDialog for Console<R, W> {
    fn choose_files_to_open(&mut self, filter: &FileFilter) -> Vec<PathBuf> {
        self.note(format_args!(
            "Enter {} (*.{}) or folders, one per line. Blank line to finish.",
            filter.name, filter.extension
        ));

        let mut chosen = Vec::new();
        while let Some(line) = self.prompt("  open> ") {
            if line.is_empty() {
                break;
            }
            self.collect_matching(PathBuf::from(line), filter, &mut chosen);
        }
        chosen
    }

    fn choose_file_to_open(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        loop {
            let prompt = format!("  open {} (*.{})> ", filter.name, filter.extension);
            let line = self.prompt(&prompt)?;
            if line.is_empty() {
                return None;
            }

            let path = PathBuf::from(line);
            if path.is_file() && filter.matches(&path) {
                return Some(path);
            }
            self.note(format_args!(
                "{} is not an existing *.{} file",
                path.display(),
                filter.extension
            ));
        }
    }

    fn choose_file_to_save(
        &mut self,
        filter: &FileFilter,
        default_extension: &str,
    ) -> Option<PathBuf> {
        let prompt = format!("  save as {} (*.{})> ", filter.name, filter.extension);
        let line = self.prompt(&prompt)?;
        if line.is_empty() {
            return None;
        }

        let mut path = PathBuf::from(line);
        if path.extension().is_none() {
            path.set_extension(default_extension.trim_start_matches('.'));
        }
        Some(path)
    }
}

impl<R: BufRead, W: Write> Notifier for Console<R, W> {
    fn info(&mut self, title: &str, message: &str) {
        let _ = writeln!(self.output, "[{}] {}", title, message);
    }

    fn warn(&mut self, title: &str, message: &str) {
        let _ = writeln!(self.output, "[warning: {}] {}", title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        let _ = writeln!(self.output, "[error: {}] {}", title, message);
    }
}
