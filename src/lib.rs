//! PDF.co MCP Server Library
//!
//! A Model Context Protocol (MCP) server for PDF.co integration.
//! Provides tools for merging, splitting, converting and extracting PDFs via the PDF.co API.

pub mod config;
pub mod error;
pub mod mcp;
pub mod pdfco;

pub use config::Config;
pub use error::{PdfMcpError, Result};
