//! MCP Tool definitions and handlers
//!
//! Defines all available tools and their implementations.

use std::sync::Arc;

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::config::pdfco::API_KEY_ENV;
use crate::error::{ConfigError, McpError, PdfMcpError, Result, ValidationError};
use crate::mcp::types::{CallToolResult, Tool};
use crate::pdfco::client::PdfCoClient;
use crate::pdfco::types::{
    BalanceResponse, FileResponse, JsonResponse, PageLayout, SplitResponse, TextResponse,
};

/// Tool names
pub mod names {
    pub const MERGE_PDF: &str = "merge_pdf";
    pub const SPLIT_PDF: &str = "split_pdf";
    pub const PDF_TO_TEXT: &str = "pdf_to_text";
    pub const PDF_TO_JSON: &str = "pdf_to_json";
    pub const HTML_TO_PDF: &str = "html_to_pdf";
    pub const GET_BALANCE: &str = "get_balance";

    pub const ALL: [&str; 6] = [
        MERGE_PDF,
        SPLIT_PDF,
        PDF_TO_TEXT,
        PDF_TO_JSON,
        HTML_TO_PDF,
        GET_BALANCE,
    ];
}

// ==================== Tool Arguments ====================

#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MergeArgs {
    /// URLs of the PDF files to merge, in order
    #[validate(length(min = 1), custom = "no_blank_entries")]
    pub urls: Vec<String>,

    /// File name for the merged PDF
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SplitArgs {
    /// URL of the PDF file to split
    #[validate(length(min = 1), custom = "not_blank")]
    pub url: String,

    /// Page ranges, one output file per range (e.g. "1-2,3-")
    #[validate(length(min = 1), custom = "not_blank")]
    pub pages: String,

    /// Base file name for the output PDFs
    pub name: Option<String>,

    /// Password of a protected PDF
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExtractArgs {
    /// URL of the PDF file
    #[validate(length(min = 1), custom = "not_blank")]
    pub url: String,

    /// Pages to extract (e.g. "0,2-5"), all pages when omitted
    pub pages: Option<String>,

    /// Password of a protected PDF
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HtmlToPdfArgs {
    /// HTML document to render; provide either this or url
    #[validate(length(min = 1), custom = "not_blank")]
    pub html: Option<String>,

    /// Web page to render; provide either this or html
    #[validate(length(min = 1), custom = "not_blank")]
    pub url: Option<String>,

    /// File name for the generated PDF
    pub name: Option<String>,

    /// Paper size (e.g. "Letter", "A4")
    pub paper_size: Option<String>,

    /// "Portrait" or "Landscape"
    pub orientation: Option<String>,

    /// CSS-style margins (e.g. "10px 20px 10px 20px")
    pub margins: Option<String>,

    /// Render background colors and images
    pub print_background: Option<bool>,

    /// HTML for the page header
    pub header: Option<String>,

    /// HTML for the page footer
    pub footer: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct BalanceArgs {}

/// Whitespace-only values count as missing
fn not_blank(value: &str) -> std::result::Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

fn no_blank_entries(values: &[String]) -> std::result::Result<(), validator::ValidationError> {
    values.iter().try_for_each(|v| not_blank(v))
}

/// Tool handler
pub struct ToolHandler {
    client: Arc<PdfCoClient>,
}

impl ToolHandler {
    /// Create a new tool handler
    pub fn new(client: Arc<PdfCoClient>) -> Self {
        Self { client }
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        tool_definitions()
    }

    /// Call a tool by name
    ///
    /// Unknown names are rejected first, then a missing API key, then
    /// invalid arguments. Only after that does any request leave the process.
    pub async fn call_tool(&self, name: &str, args: Value) -> Result<CallToolResult> {
        if !names::ALL.contains(&name) {
            return Err(PdfMcpError::Mcp(McpError::UnknownTool {
                name: name.to_string(),
            }));
        }

        if !self.client.has_api_key() {
            tracing::warn!("Rejecting {}: {} is not set", name, API_KEY_ENV);
            return Err(PdfMcpError::Config(ConfigError::MissingApiKey {
                var: API_KEY_ENV.to_string(),
            }));
        }

        tracing::info!("Calling tool {}", name);

        match name {
            names::MERGE_PDF => self.handle_merge(args).await,
            names::SPLIT_PDF => self.handle_split(args).await,
            names::PDF_TO_TEXT => self.handle_pdf_to_text(args).await,
            names::PDF_TO_JSON => self.handle_pdf_to_json(args).await,
            names::HTML_TO_PDF => self.handle_html_to_pdf(args).await,
            names::GET_BALANCE => self.handle_balance(args).await,
            _ => Err(PdfMcpError::Mcp(McpError::UnknownTool {
                name: name.to_string(),
            })),
        }
    }

    // ==================== Tool Handlers ====================

    async fn handle_merge(&self, args: Value) -> Result<CallToolResult> {
        let args: MergeArgs = parse_args(args)?;
        let response = self.client.merge(&args.urls, args.name).await?;
        Ok(CallToolResult::text(format_merge(&response)))
    }

    async fn handle_split(&self, args: Value) -> Result<CallToolResult> {
        let args: SplitArgs = parse_args(args)?;
        let response = self
            .client
            .split(&args.url, &args.pages, args.name, args.password)
            .await?;
        Ok(CallToolResult::text(format_split(&response)))
    }

    async fn handle_pdf_to_text(&self, args: Value) -> Result<CallToolResult> {
        let args: ExtractArgs = parse_args(args)?;
        let response = self
            .client
            .pdf_to_text(&args.url, args.pages, args.password)
            .await?;
        Ok(CallToolResult::text(format_text(&response)))
    }

    async fn handle_pdf_to_json(&self, args: Value) -> Result<CallToolResult> {
        let args: ExtractArgs = parse_args(args)?;
        let response = self
            .client
            .pdf_to_json(&args.url, args.pages, args.password)
            .await?;
        Ok(CallToolResult::text(format_json(&response)?))
    }

    async fn handle_html_to_pdf(&self, args: Value) -> Result<CallToolResult> {
        let args: HtmlToPdfArgs = parse_args(args)?;

        let layout = PageLayout {
            name: args.name,
            paper_size: args.paper_size,
            orientation: args.orientation,
            margins: args.margins,
            print_background: args.print_background,
            header: args.header,
            footer: args.footer,
        };

        let response = match (args.html, args.url) {
            (Some(html), None) => self.client.html_to_pdf(&html, layout).await?,
            (None, Some(url)) => self.client.url_to_pdf(&url, layout).await?,
            (None, None) => {
                return Err(PdfMcpError::Validation(ValidationError::MissingFields {
                    fields: vec!["html".to_string(), "url".to_string()],
                }))
            }
            (Some(_), Some(_)) => {
                return Err(PdfMcpError::Validation(ValidationError::InvalidParameter {
                    name: "html".to_string(),
                    message: "provide either html or url, not both".to_string(),
                }))
            }
        };

        Ok(CallToolResult::text(format_created(&response)))
    }

    async fn handle_balance(&self, args: Value) -> Result<CallToolResult> {
        let _: BalanceArgs = parse_args(args)?;
        let response = self.client.balance().await?;
        Ok(CallToolResult::text(format_balance(&response)))
    }
}

/// Deserialize and validate tool arguments
fn parse_args<T: DeserializeOwned + Validate>(args: Value) -> Result<T> {
    let args = if args.is_null() { json!({}) } else { args };

    let parsed: T = serde_json::from_value(args).map_err(|e| {
        PdfMcpError::Mcp(McpError::InvalidArguments {
            message: e.to_string(),
        })
    })?;
    parsed.validate()?;
    Ok(parsed)
}

// ==================== Response Formatting ====================

fn push_stats(text: &mut String, page_count: Option<u32>, remaining_credits: Option<i64>) {
    if let Some(pages) = page_count {
        text.push_str(&format!("\nPages: {}", pages));
    }
    if let Some(credits) = remaining_credits {
        text.push_str(&format!("\nRemaining credits: {}", credits));
    }
}

pub fn format_merge(response: &FileResponse) -> String {
    let mut text = format!("PDF files merged successfully.\nURL: {}", response.url);
    push_stats(&mut text, response.page_count, response.remaining_credits);
    text
}

pub fn format_split(response: &SplitResponse) -> String {
    let mut text = format!("PDF split into {} file(s):", response.urls.len());
    for url in &response.urls {
        text.push('\n');
        text.push_str(url);
    }
    push_stats(&mut text, response.page_count, response.remaining_credits);
    text
}

pub fn format_text(response: &TextResponse) -> String {
    if response.body.trim().is_empty() {
        return "No text found in the document.".to_string();
    }
    response.body.clone()
}

pub fn format_json(response: &JsonResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(&response.body)?)
}

pub fn format_created(response: &FileResponse) -> String {
    let mut text = format!("PDF created successfully.\nURL: {}", response.url);
    push_stats(&mut text, response.page_count, response.remaining_credits);
    text
}

pub fn format_balance(response: &BalanceResponse) -> String {
    format!("Remaining credits: {}", response.remaining_credits)
}

// ==================== Schema Definitions ====================

/// Declarations of every tool, in registry order
pub fn tool_definitions() -> Vec<Tool> {
    vec![
        tool_def::<MergeArgs>(names::MERGE_PDF, "Merge multiple PDF files into a single PDF"),
        tool_def::<SplitArgs>(names::SPLIT_PDF, "Split a PDF file into multiple files by page ranges"),
        tool_def::<ExtractArgs>(names::PDF_TO_TEXT, "Extract plain text from a PDF file"),
        tool_def::<ExtractArgs>(names::PDF_TO_JSON, "Extract text, tables and layout from a PDF file as JSON"),
        tool_def::<HtmlToPdfArgs>(names::HTML_TO_PDF, "Convert an HTML document or a web page URL to PDF"),
        tool_def::<BalanceArgs>(names::GET_BALANCE, "Get the remaining credit balance of the PDF.co account"),
    ]
}

fn tool_def<T: JsonSchema>(name: &str, description: &str) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema: input_schema::<T>(),
    }
}

/// JSON Schema for an argument struct, without the root metadata
fn input_schema<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft07()
        .with(|s| {
            s.option_add_null_type = false;
            s.inline_subschemas = true;
        })
        .into_generator();
    let root = generator.into_root_schema_for::<T>();

    let mut schema = serde_json::to_value(root).unwrap_or_else(|_| json!({}));
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
        obj.remove("definitions");
        obj.insert("type".to_string(), json!("object"));
        obj.entry("properties").or_insert_with(|| json!({}));
    }
    schema
}
