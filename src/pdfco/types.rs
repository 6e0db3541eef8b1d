//! PDF.co API type definitions
//!
//! These types mirror the PDF.co request bodies and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `/pdf/merge`
#[derive(Debug, Clone, Serialize)]
pub struct MergeRequest {
    /// Source URLs joined with commas
    pub url: String,

    /// Output file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "async")]
    pub is_async: bool,
}

/// Request body for `/pdf/split`
#[derive(Debug, Clone, Serialize)]
pub struct SplitRequest {
    pub url: String,

    /// Page ranges, e.g. `1-2,3-`
    pub pages: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "async")]
    pub is_async: bool,
}

/// Request body for `/pdf/convert/to/text` and `/pdf/convert/to/json`
#[derive(Debug, Clone, Serialize)]
pub struct ConvertRequest {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Return the extracted content in the response body instead of a link
    pub inline: bool,

    #[serde(rename = "async")]
    pub is_async: bool,
}

/// Page layout options shared by the HTML and URL converters
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,

    /// CSS-style margins, e.g. `10px 20px 10px 20px`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,

    /// HTML for the page header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// HTML for the page footer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// Request body for `/pdf/convert/from/html`
#[derive(Debug, Clone, Serialize)]
pub struct HtmlToPdfRequest {
    pub html: String,

    #[serde(flatten)]
    pub layout: PageLayout,

    #[serde(rename = "async")]
    pub is_async: bool,
}

/// Request body for `/pdf/convert/from/url`
#[derive(Debug, Clone, Serialize)]
pub struct UrlToPdfRequest {
    pub url: String,

    #[serde(flatten)]
    pub layout: PageLayout,

    #[serde(rename = "async")]
    pub is_async: bool,
}

/// Response carrying a single output file (merge, HTML/URL to PDF)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    /// Link to the generated file
    pub url: String,

    #[serde(default)]
    pub page_count: Option<u32>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub remaining_credits: Option<i64>,
}

/// Response of `/pdf/split`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    #[serde(default)]
    pub urls: Vec<String>,

    #[serde(default)]
    pub page_count: Option<u32>,

    #[serde(default)]
    pub remaining_credits: Option<i64>,
}

/// Response of `/pdf/convert/to/text` with `inline: true`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextResponse {
    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub page_count: Option<u32>,

    #[serde(default)]
    pub remaining_credits: Option<i64>,
}

/// Response of `/pdf/convert/to/json` with `inline: true`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonResponse {
    /// Extracted document structure, left opaque
    #[serde(default)]
    pub body: Value,

    #[serde(default)]
    pub page_count: Option<u32>,

    #[serde(default)]
    pub remaining_credits: Option<i64>,
}

/// Response of `/account/credit/balance`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub remaining_credits: i64,
}

/// Error envelope present on every PDF.co response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub error: bool,

    #[serde(default)]
    pub status: Option<Value>,

    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_request_uses_async_keyword() {
        let request = MergeRequest {
            url: "a.pdf,b.pdf".to_string(),
            name: None,
            is_async: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"url": "a.pdf,b.pdf", "async": false}));
    }

    #[test]
    fn test_html_request_flattens_layout() {
        let request = HtmlToPdfRequest {
            html: "<p>hi</p>".to_string(),
            layout: PageLayout {
                paper_size: Some("A4".to_string()),
                print_background: Some(true),
                ..Default::default()
            },
            is_async: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["paperSize"], "A4");
        assert_eq!(value["printBackground"], true);
        assert!(value.get("orientation").is_none());
    }

    #[test]
    fn test_split_response_deserialize() {
        let json = r#"{"urls":["https://x/1.pdf","https://x/2.pdf"],"pageCount":2,"error":false,"status":200,"remainingCredits":100}"#;
        let resp: SplitResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.urls.len(), 2);
        assert_eq!(resp.remaining_credits, Some(100));
    }

    #[test]
    fn test_api_status_defaults() {
        let status: ApiStatus = serde_json::from_str(r#"{"url":"x"}"#).unwrap();
        assert!(!status.error);
        assert!(status.message.is_none());
    }
}
