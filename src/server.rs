//! MCP server exposing the exploration tools
//!
//! The server is stateless: each call validates its paths, does its
//! filesystem work on the blocking pool and answers with one text content
//! item. String results are sent as-is; everything else is serialized JSON.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router,
};
use serde_json::{Value, json};

use crate::config::{Tool, ToolSet};
use crate::tools;
use crate::tree::{DEFAULT_MAX_DEPTH, TreeFormat};

const INSTRUCTIONS: &str = "Read-only project exploration. All paths must be absolute, \
    exist on disk and contain no URL-encoding. Use dir_tree for an overview of a directory, \
    python_outline for the imports, classes and functions of Python files, and \
    markdown_outline for the headings of Markdown files.";

fn default_max_depth() -> i64 {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DirTreeArgs {
    /// Absolute path to the root directory, e.g. "/home/user/project"
    pub root_path: String,
    /// Directory levels to descend below the root. 0 lists only the root's entries.
    #[serde(default = "default_max_depth")]
    pub max_depth: i64,
    /// Output format: "text" (default), "json" or "markdown"
    #[serde(default)]
    pub output_format: TreeFormat,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct OutlineArgs {
    /// Absolute paths of the files to outline
    pub paths: Vec<String>,
}

/// Stateless MCP service answering `dir_tree`, `python_outline` and
/// `markdown_outline`.
#[derive(Clone)]
pub struct ProjectExplorer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ProjectExplorer {
    /// Build a server exposing only the enabled tools.
    pub fn new(tools: &ToolSet) -> Self {
        let mut tool_router = Self::tool_router();
        for tool in Tool::ALL {
            if !tools.is_enabled(tool) {
                tool_router.remove_route(tool.name());
                tracing::info!(tool = %tool, "tool disabled");
            }
        }
        Self { tool_router }
    }

    /// Names of the tools this server answers.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    #[tool(
        description = "Returns a compact file and folder tree with depth limitation. Use it for a \
                       quick overview of a project's structure, not for reading file contents. \
                       The path must be absolute, exist on disk and contain no URL-encoding. \
                       Entries are sorted by name; directories end with '/' and each level is \
                       indented by two spaces."
    )]
    async fn dir_tree(
        &self,
        Parameters(args): Parameters<DirTreeArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(root_path = %args.root_path, max_depth = args.max_depth, "dir_tree");
        let DirTreeArgs {
            root_path,
            max_depth,
            output_format,
        } = args;
        run_blocking(move || tools::dir_tree(&root_path, max_depth, output_format)).await
    }

    #[tool(
        description = "Returns an outline for each Python file: module docstring, imports, classes \
                       with their methods, and top-level functions, each with its line number. \
                       Use it to understand code structure without reading whole files. Paths \
                       must be absolute, exist on disk and contain no URL-encoding."
    )]
    async fn python_outline(
        &self,
        Parameters(args): Parameters<OutlineArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(files = args.paths.len(), "python_outline");
        run_blocking(move || tools::python_outline(&args.paths)).await
    }

    #[tool(
        description = "Returns an outline for each Markdown file: headings with their level and \
                       line number. Use it for navigating documentation, not for reading full \
                       content. Paths must be absolute, exist on disk and contain no URL-encoding."
    )]
    async fn markdown_outline(
        &self,
        Parameters(args): Parameters<OutlineArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(files = args.paths.len(), "markdown_outline");
        run_blocking(move || tools::markdown_outline(&args.paths)).await
    }
}

/// Run a filesystem-bound tool off the async runtime and wrap its value.
///
/// A task that panics or is cancelled still answers with a successful result
/// holding `{"error": msg}`, like every other tool failure.
async fn run_blocking<F>(work: F) -> Result<CallToolResult, McpError>
where
    F: FnOnce() -> Value + Send + 'static,
{
    let value = match tokio::task::spawn_blocking(work).await {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "tool task failed");
            json!({ "error": format!("tool task failed: {err}") })
        }
    };
    Ok(CallToolResult::success(vec![Content::text(render(value)?)]))
}

fn render(value: Value) -> Result<String, McpError> {
    match value {
        Value::String(text) => Ok(text),
        other => serde_json::to_string(&other).map_err(|err| {
            McpError::internal_error(format!("failed to serialize result: {err}"), None)
        }),
    }
}

#[tool_handler]
impl ServerHandler for ProjectExplorer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::new(
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
            ))
            .with_instructions(INSTRUCTIONS)
    }
}

impl Default for ProjectExplorer {
    fn default() -> Self {
        Self::new(&ToolSet::default())
    }
}
