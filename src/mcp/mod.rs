//! MCP (Model Context Protocol) module
//!
//! Stdio JSON-RPC server, protocol types and the PDF.co tool registry.

pub mod server;
pub mod tools;
pub mod types;
