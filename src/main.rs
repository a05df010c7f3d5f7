//! CLI entry point for project-explorer

use std::process;

use clap::Parser;
use project_explorer::{Cli, ProjectExplorer, logging};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let settings = cli.settings();

    if cli.list_tools {
        for tool in settings.tools.enabled() {
            println!("{tool}");
        }
        return;
    }

    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("project-explorer: {e:#}");
        process::exit(1);
    }

    if let Err(e) = serve(ProjectExplorer::new(&settings.tools)).await {
        tracing::error!(error = %e, "server stopped with an error");
        eprintln!("project-explorer: {e:#}");
        process::exit(1);
    }
}

async fn serve(server: ProjectExplorer) -> anyhow::Result<()> {
    tracing::info!(tools = ?server.tool_names(), "serving MCP over stdio");
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    tracing::info!("client disconnected, shutting down");
    Ok(())
}
