use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdftool")]
#[command(about = "Merge PDFs into one file or split a PDF at chosen pages")]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive merge / split session (default)
    Interactive,

    /// Run as MCP server
    Mcp,

    /// Show the page count of a PDF
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Combine multiple PDFs into one, in the order given
    Merge {
        /// PDF files to merge
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Split a PDF into parts after the given pages
    Split {
        /// PDF file to split
        path: PathBuf,

        /// Pages after which a new part starts (e.g., "3,5,8")
        #[arg(short, long)]
        at: String,

        /// Output file name; parts go to <dir>/<name>_split/part_N.pdf
        #[arg(short, long)]
        output: PathBuf,
    },
}
