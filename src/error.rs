//! Error types for the PDF.co MCP Server
//!
//! This module defines the error hierarchy for all operations in the server
//! and how each error surfaces as a JSON-RPC error.

use thiserror::Error;

use crate::mcp::types::JsonRpcError;

/// Main error type for the PDF.co MCP Server
#[derive(Error, Debug)]
pub enum PdfMcpError {
    /// PDF.co API errors
    #[error("PDF.co API error: {0}")]
    PdfCo(#[from] PdfCoApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// MCP protocol errors
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// PDF.co API errors
#[derive(Error, Debug)]
pub enum PdfCoApiError {
    /// The API answered with a non-success HTTP status
    #[error("request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    /// The API answered 2xx but flagged `"error": true` in the body
    #[error("{message}")]
    ApiReported { message: String },

    #[error("unexpected response: {message}")]
    UnexpectedResponse { message: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingApiKey { var: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required parameter(s): {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Invalid parameter: {name} - {message}")]
    InvalidParameter { name: String, message: String },
}

/// MCP protocol errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid tool arguments: {message}")]
    InvalidArguments { message: String },
}

/// Result type alias for PDF.co MCP operations
pub type Result<T> = std::result::Result<T, PdfMcpError>;

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ValidationError::MissingFields { fields }
    }
}

impl From<validator::ValidationErrors> for PdfMcpError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PdfMcpError::Validation(ValidationError::from(errors))
    }
}

impl PdfMcpError {
    /// Translate into the JSON-RPC error returned to the caller
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        match self {
            PdfMcpError::Mcp(McpError::UnknownTool { name }) => {
                JsonRpcError::method_not_found(name.as_str())
            }
            PdfMcpError::Mcp(McpError::InvalidArguments { .. }) | PdfMcpError::Validation(_) => {
                JsonRpcError::invalid_params(self.to_string())
            }
            PdfMcpError::Config(ConfigError::MissingApiKey { var }) => {
                JsonRpcError::invalid_request(format!("{} environment variable is not set", var))
            }
            _ => JsonRpcError::internal_error(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PdfCoApiError::RequestFailed {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert!(err.to_string().contains("Invalid API key"));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_error_conversion() {
        let api_err = PdfCoApiError::ApiReported {
            message: "File not found".to_string(),
        };
        let err: PdfMcpError = api_err.into();
        assert!(matches!(err, PdfMcpError::PdfCo(_)));
    }

    #[test]
    fn test_jsonrpc_codes() {
        let unknown: PdfMcpError = McpError::UnknownTool {
            name: "nope".to_string(),
        }
        .into();
        assert_eq!(unknown.to_jsonrpc_error().code, -32601);

        let missing_key: PdfMcpError = ConfigError::MissingApiKey {
            var: "PDFCO_API_KEY".to_string(),
        }
        .into();
        assert_eq!(missing_key.to_jsonrpc_error().code, -32600);

        let missing_field: PdfMcpError = ValidationError::MissingFields {
            fields: vec!["url".to_string()],
        }
        .into();
        let rpc = missing_field.to_jsonrpc_error();
        assert_eq!(rpc.code, -32602);
        assert!(rpc.message.contains("url"));
    }

    #[test]
    fn test_upstream_message_kept_in_internal_error() {
        let err: PdfMcpError = PdfCoApiError::ApiReported {
            message: "Password is required".to_string(),
        }
        .into();
        let rpc = err.to_jsonrpc_error();
        assert_eq!(rpc.code, -32603);
        assert!(rpc.message.contains("Password is required"));
    }
}
