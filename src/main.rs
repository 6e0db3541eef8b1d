//! PDF.co MCP Server - Rust Implementation
//!
//! A Model Context Protocol (MCP) server for PDF.co integration.
//! Provides tools for merging, splitting, converting and extracting PDFs via the PDF.co API.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pdfco_mcp_server::config::pdfco::{API_KEY_ENV, API_URL_ENV};
use pdfco_mcp_server::config::Config;
use pdfco_mcp_server::mcp::server::McpServer;
use pdfco_mcp_server::mcp::tools::tool_definitions;
use pdfco_mcp_server::pdfco::client::PdfCoClient;

/// PDF.co MCP Server
#[derive(Parser)]
#[command(name = "pdfco-mcp-server")]
#[command(author, version, about = "PDF.co MCP Server - A Model Context Protocol server for PDF.co")]
struct Cli {
    /// Override the PDF.co API base URL
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tool declarations as JSON and exit
    Tools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::new().context("failed to load configuration")?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url).context("invalid --api-url")?;
    }

    match cli.command {
        Some(Commands::Tools) => {
            let tools = serde_json::to_string_pretty(&tool_definitions())?;
            println!("{}", tools);
        }
        None => run_server(config).await?,
    }

    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    if !config.has_api_key() {
        tracing::warn!(
            "{} is not set; tool calls will be rejected until it is provided",
            API_KEY_ENV
        );
    }

    tracing::info!("Starting PDF.co MCP server against {}", config.api_base_url);

    let client = Arc::new(PdfCoClient::new(&config).context("failed to build HTTP client")?);

    let mut server = McpServer::new(client);
    server.run_stdio().await?;

    Ok(())
}
