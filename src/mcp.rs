use anyhow::Result;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};

use crate::commands::info::summarize;
use crate::commands::{merge, split};
use crate::pdf::PdfDocument;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfMergeRequest {
    #[schemars(description = "PDF files to concatenate, in output order")]
    pub inputs: Vec<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[schemars(description = "Path to the PDF file to split")]
    pub path: String,
    #[schemars(description = "Pages after which a new part starts, e.g. '3,5,8'")]
    pub split_points: String,
    #[schemars(description = "Output path; parts go to '<dir>/<name>_split/'")]
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Get the file name and page count of a PDF")]
    fn pdf_info(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        match summarize(&path) {
            Ok(summary) => {
                let result = PdfInfoResult {
                    path,
                    file_name: summary.file_name,
                    page_count: summary.page_count,
                };
                serde_json::to_string_pretty(&result)
                    .unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Concatenate several PDFs, in order, into one new PDF")]
    fn pdf_merge(&self, Parameters(req): Parameters<PdfMergeRequest>) -> String {
        match merge::merge_files(&req.inputs, &req.output) {
            Ok(report) => {
                let result = MergeResult {
                    output_path: req.output,
                    files_merged: report.files_merged,
                    page_count: report.total_pages,
                };
                serde_json::to_string_pretty(&result)
                    .unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "Split a PDF into consecutive parts at the given pages. '3,5,8' on a 10 page file gives parts of 3, 2, 3 and 2 pages.")]
    fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };

        let ranges = match split::plan(&req.split_points, doc.page_count()) {
            Ok(r) => r,
            Err(e) => return format!("Error: {}", e),
        };

        let dir = match split::output_dir(&req.output) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };

        match split::write_parts(&doc, &ranges, dir) {
            Ok(report) => {
                let result = SplitResult {
                    output_dir: report.output_dir.display().to_string(),
                    parts: report
                        .parts
                        .iter()
                        .zip(&ranges)
                        .map(|(path, range)| SplitPartResult {
                            path: path.display().to_string(),
                            first_page: range.start + 1,
                            last_page: range.end,
                        })
                        .collect(),
                };
                serde_json::to_string_pretty(&result)
                    .unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PdfInfoResult {
    pub path: String,
    pub file_name: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MergeResult {
    pub output_path: String,
    pub files_merged: usize,
    pub page_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SplitPartResult {
    pub path: String,
    pub first_page: u32,
    pub last_page: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SplitResult {
    pub output_dir: String,
    pub parts: Vec<SplitPartResult>,
}

impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF merge and split tools. Use pdf_info to get the page count of a PDF, \
                 pdf_merge to concatenate PDFs in order, and pdf_split to cut a PDF into \
                 parts at given page numbers."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfServer::new();
    tracing::info!("serving MCP over stdio");

    // Serve using stdin/stdout as a tuple
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    service.waiting().await?;

    Ok(())
}
