pub mod app;
pub mod dialog;

use anyhow::Result;
use app::{Action, App, Flow};
use dialog::Console;
use std::io::{BufRead, Write};

/// Drive the home / merge / split views from a line-oriented terminal until
/// the user quits or input ends.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let mut console = Console::new(input, output);
    let mut app = App::new();

    loop {
        app.render(console.output())?;

        let Some(line) = console.prompt("> ") else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        match app.parse(&line) {
            Some(Action::Help) => writeln!(console.output(), "{}", app.help())?,
            Some(action) => {
                if app.handle(action, &mut console) == Flow::Quit {
                    break;
                }
            }
            None => writeln!(console.output(), "Unknown command: {} (type help)", line)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testing::{page_markers, write_sample_pdf};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(script: String) -> String {
        let mut output = Vec::new();
        run(Cursor::new(script.into_bytes()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit_from_home() {
        let printed = session("q\n".to_string());
        assert!(printed.contains("What do you want to do?"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let printed = session("2\nbogus\n".to_string());
        assert!(printed.contains("Split PDF"));
        assert!(printed.contains("Unknown command: bogus"));
    }

    #[test]
    fn test_merge_through_terminal() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", "A", 2);
        let b = write_sample_pdf(dir.path(), "b.pdf", "B", 1);
        let out = dir.path().join("joined");

        let script = format!(
            "1\nadd\n{}\n{}\n\nup 2\nmerge\n{}\nq\n",
            a.display(),
            b.display(),
            out.display()
        );
        let printed = session(script);

        assert!(printed.contains("[Success] Merged PDF saved to:"));
        assert_eq!(
            page_markers(&dir.path().join("joined.pdf")),
            vec!["B-1", "A-1", "A-2"]
        );
    }

    #[test]
    fn test_split_through_terminal() {
        let dir = TempDir::new().unwrap();
        let input = write_sample_pdf(dir.path(), "doc.pdf", "D", 4);
        let out = dir.path().join("pieces.pdf");

        let script = format!(
            "split\nload\n{}\npoints 2\nsplit\n{}\nback\nq\n",
            input.display(),
            out.display()
        );
        let printed = session(script);

        assert!(printed.contains("Loaded: doc.pdf"));
        assert!(printed.contains("Pages: 4"));
        assert!(printed.contains("PDF split into 2 parts."));
        let parts = dir.path().join("pieces_split");
        assert_eq!(page_markers(&parts.join("part_2.pdf")), vec!["D-3", "D-4"]);
    }
}
