use super::dialog::{Frontend, PDF_FILES};
use crate::commands::info::{display_name, DocumentSummary};
use crate::commands::{merge, split};
use crate::error::ToolError;
use crate::merge_list::MergeList;
use crate::pdf::PdfDocument;
use std::io::{self, Write};

/// What the user asked for, already resolved against the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenMerge,
    OpenSplit,
    Back,
    Quit,
    Help,
    AddFiles,
    Remove(usize),
    MoveUp(usize),
    MoveDown(usize),
    Merge,
    LoadFile,
    SetSplitPoints(String),
    Split,
}

/// A document ready to be split
pub struct LoadedDocument {
    pub doc: PdfDocument,
    pub summary: DocumentSummary,
}

#[derive(Default)]
pub struct SplitView {
    pub loaded: Option<LoadedDocument>,
    pub points: String,
}

pub enum View {
    Home,
    Merge(MergeList),
    Split(SplitView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    view: View,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App { view: View::Home }
    }

    /// Interpret a typed command in the context of the current view.
    /// Rows are shown 1-based and converted to list indices here.
    pub fn parse(&self, line: &str) -> Option<Action> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let word = word.to_ascii_lowercase();

        match (word.as_str(), &self.view) {
            ("q" | "quit" | "exit", _) => Some(Action::Quit),
            ("help" | "?", _) => Some(Action::Help),
            ("back" | "b", View::Merge(_) | View::Split(_)) => Some(Action::Back),

            ("1" | "merge", View::Home) => Some(Action::OpenMerge),
            ("2" | "split", View::Home) => Some(Action::OpenSplit),

            ("add" | "a", View::Merge(_)) => Some(Action::AddFiles),
            ("rm" | "remove", View::Merge(_)) => row(rest).map(Action::Remove),
            ("up", View::Merge(_)) => row(rest).map(Action::MoveUp),
            ("down", View::Merge(_)) => row(rest).map(Action::MoveDown),
            ("merge" | "m", View::Merge(_)) => Some(Action::Merge),

            ("load" | "l", View::Split(_)) => Some(Action::LoadFile),
            ("points" | "p", View::Split(_)) => Some(Action::SetSplitPoints(rest.to_string())),
            ("split" | "s", View::Split(_)) => Some(Action::Split),

            _ => None,
        }
    }

    pub fn handle<F: Frontend>(&mut self, action: Action, ui: &mut F) -> Flow {
        tracing::debug!(?action, "handling action");

        match action {
            Action::Quit => return Flow::Quit,
            Action::Help => {}
            Action::OpenMerge => self.view = View::Merge(MergeList::new()),
            Action::OpenSplit => self.view = View::Split(SplitView::default()),
            Action::Back => self.view = View::Home,
            _ => match &mut self.view {
                View::Merge(list) => handle_merge(list, action, ui),
                View::Split(state) => handle_split(state, action, ui),
                View::Home => {}
            },
        }

        Flow::Continue
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        match &self.view {
            View::Home => {
                writeln!(out, "PDF Tool")?;
                writeln!(out, "What do you want to do?")?;
                writeln!(out, "  1) Merge PDFs")?;
                writeln!(out, "  2) Split PDF")?;
                writeln!(out, "  q) Quit")?;
            }
            View::Merge(list) => {
                writeln!(out, "Merge PDFs")?;
                writeln!(out, "Selected PDFs ({}):", list.len())?;
                if list.is_empty() {
                    writeln!(out, "  (none)")?;
                }
                for (i, path) in list.iter().enumerate() {
                    writeln!(out, "  {:>3}. {}", i + 1, display_name(path))?;
                }
                writeln!(out, "Commands: add, rm N, up N, down N, merge, back, help")?;
            }
            View::Split(state) => {
                writeln!(out, "Split PDF")?;
                match &state.loaded {
                    Some(loaded) => writeln!(
                        out,
                        "Loaded: {}\nPages: {}",
                        loaded.summary.file_name, loaded.summary.page_count
                    )?,
                    None => writeln!(out, "No PDF loaded.")?,
                }
                writeln!(out, "Split page numbers (e.g. 3,5,8): {}", state.points)?;
                let split = if state.loaded.is_some() {
                    "split"
                } else {
                    "split (disabled until a PDF is loaded)"
                };
                writeln!(out, "Commands: load, points LIST, {}, back, help", split)?;
            }
        }
        Ok(())
    }

    pub fn help(&self) -> &'static str {
        match self.view {
            View::Home => "1 or merge: merge PDFs\n2 or split: split a PDF\nq: quit",
            View::Merge(_) => {
                "add: choose PDFs to append\n\
                 rm N: remove row N\n\
                 up N / down N: move row N\n\
                 merge: write all rows, in order, to one PDF\n\
                 back: return home"
            }
            View::Split(_) => {
                "load: choose the PDF to split\n\
                 points LIST: set split pages, e.g. points 3,5,8\n\
                 split: write one PDF per part into NAME_split/\n\
                 back: return home"
            }
        }
    }
}

fn row(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok()?.checked_sub(1)
}

fn handle_merge<F: Frontend>(list: &mut MergeList, action: Action, ui: &mut F) {
    match action {
        Action::AddFiles => {
            let chosen = ui.choose_files_to_open(&PDF_FILES);
            if !chosen.is_empty() {
                list.append(chosen);
            }
        }
        Action::Remove(i) => list.remove(i),
        Action::MoveUp(i) => list.move_up(i),
        Action::MoveDown(i) => list.move_down(i),
        Action::Merge => {
            if list.is_empty() {
                report(ui, "Merge", &ToolError::NoFilesSelected);
                return;
            }
            let Some(output) = ui.choose_file_to_save(&PDF_FILES, ".pdf") else {
                return;
            };
            match merge::merge_files(list.files(), &output) {
                Ok(merged) => ui.info(
                    "Success",
                    &format!("Merged PDF saved to:\n{}", merged.output_path.display()),
                ),
                Err(e) => report(ui, "Merge", &e),
            }
        }
        _ => {}
    }
}

fn handle_split<F: Frontend>(state: &mut SplitView, action: Action, ui: &mut F) {
    match action {
        Action::LoadFile => {
            let Some(path) = ui.choose_file_to_open(&PDF_FILES) else {
                return;
            };
            match PdfDocument::open(&path) {
                Ok(doc) => {
                    let summary = DocumentSummary::of(&doc);
                    state.loaded = Some(LoadedDocument { doc, summary });
                }
                Err(e) => ui.error("Error", &format!("Failed to load PDF: {}", e)),
            }
        }
        Action::SetSplitPoints(points) => state.points = points,
        Action::Split => {
            let Some(loaded) = &state.loaded else {
                report(ui, "Split", &ToolError::NoDocumentLoaded);
                return;
            };
            let ranges = match split::plan(&state.points, loaded.summary.page_count) {
                Ok(ranges) => ranges,
                Err(e) => {
                    report(ui, "Invalid Input", &e);
                    return;
                }
            };
            let Some(output) = ui.choose_file_to_save(&PDF_FILES, ".pdf") else {
                return;
            };
            let result = split::output_dir(&output)
                .and_then(|dir| split::write_parts(&loaded.doc, &ranges, dir));
            match result {
                Ok(written) => ui.info(
                    "Success",
                    &format!(
                        "PDF split into {} parts.\nSaved in folder:\n{}",
                        written.parts.len(),
                        written.output_dir.display()
                    ),
                ),
                Err(e) => ui.error("Error", &format!("Split failed: {}", e)),
            }
        }
        _ => {}
    }
}

/// Input mistakes are warnings under `title` that the user can correct in
/// place. I/O and format failures are always titled "Error".
fn report<F: Frontend>(ui: &mut F, title: &str, err: &ToolError) {
    tracing::debug!(error = %err, "operation rejected");
    if err.is_user_input() {
        ui.warn(title, &err.to_string());
    } else {
        ui.error("Error", &err.to_string());
    }
}
