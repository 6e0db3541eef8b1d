//! PDF.co API client
//!
//! Thin client over the PDF.co REST endpoints. Each operation issues exactly
//! one request and funnels the answer through [`PdfCoClient::send`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::pdfco::{endpoints, API_KEY_ENV, API_KEY_HEADER};
use crate::config::Config;
use crate::error::{ConfigError, PdfCoApiError, PdfMcpError, Result};
use crate::pdfco::types::*;

/// PDF.co API client
pub struct PdfCoClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// Base URL without trailing slash
    base_url: String,

    /// API key, if configured
    api_key: Option<String>,
}

impl PdfCoClient {
    /// Create a new PDF.co client
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Whether an API key is available
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            PdfMcpError::Config(ConfigError::MissingApiKey {
                var: API_KEY_ENV.to_string(),
            })
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ==================== Document Operations ====================

    /// Merge several PDFs into one
    pub async fn merge(&self, urls: &[String], name: Option<String>) -> Result<FileResponse> {
        let request = MergeRequest {
            url: urls.join(","),
            name,
            is_async: false,
        };
        self.post("merge", endpoints::MERGE, &request).await
    }

    /// Split a PDF by page ranges
    pub async fn split(
        &self,
        url: &str,
        pages: &str,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<SplitResponse> {
        let request = SplitRequest {
            url: url.to_string(),
            pages: pages.to_string(),
            name,
            password,
            is_async: false,
        };
        self.post("split", endpoints::SPLIT, &request).await
    }

    /// Extract plain text from a PDF
    pub async fn pdf_to_text(
        &self,
        url: &str,
        pages: Option<String>,
        password: Option<String>,
    ) -> Result<TextResponse> {
        let request = Self::inline_convert(url, pages, password);
        self.post("pdf to text", endpoints::TO_TEXT, &request).await
    }

    /// Extract structured JSON from a PDF
    pub async fn pdf_to_json(
        &self,
        url: &str,
        pages: Option<String>,
        password: Option<String>,
    ) -> Result<JsonResponse> {
        let request = Self::inline_convert(url, pages, password);
        self.post("pdf to json", endpoints::TO_JSON, &request).await
    }

    /// Render an HTML document to PDF
    pub async fn html_to_pdf(&self, html: &str, layout: PageLayout) -> Result<FileResponse> {
        let request = HtmlToPdfRequest {
            html: html.to_string(),
            layout,
            is_async: false,
        };
        self.post("html to pdf", endpoints::FROM_HTML, &request).await
    }

    /// Render a web page to PDF
    pub async fn url_to_pdf(&self, url: &str, layout: PageLayout) -> Result<FileResponse> {
        let request = UrlToPdfRequest {
            url: url.to_string(),
            layout,
            is_async: false,
        };
        self.post("url to pdf", endpoints::FROM_URL, &request).await
    }

    /// Get the remaining credit balance of the account
    pub async fn balance(&self) -> Result<BalanceResponse> {
        let key = self.api_key()?;
        let request = self
            .http_client
            .get(self.url(endpoints::BALANCE))
            .header(API_KEY_HEADER, key);
        self.send("balance", request).await
    }

    fn inline_convert(url: &str, pages: Option<String>, password: Option<String>) -> ConvertRequest {
        ConvertRequest {
            url: url.to_string(),
            pages,
            name: None,
            password,
            inline: true,
            is_async: false,
        }
    }

    // ==================== Transport ====================

    async fn post<B, T>(&self, operation: &str, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let key = self.api_key()?;
        let request = self
            .http_client
            .post(self.url(path))
            .header(API_KEY_HEADER, key)
            .json(body);
        self.send(operation, request).await
    }

    /// Perform a request and translate HTTP and API-reported failures
    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        tracing::debug!("PDF.co {} request", operation);

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::warn!("PDF.co {} response body unreadable (HTTP {}): {}", operation, status, e);
            PdfMcpError::Http(e)
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiStatus>(&text)
                .ok()
                .and_then(|s| s.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| {
                    if text.trim().is_empty() {
                        status.canonical_reason().unwrap_or("empty response body").to_string()
                    } else {
                        text.clone()
                    }
                });
            tracing::warn!("PDF.co {} failed with HTTP {}: {}", operation, status, message);
            return Err(PdfMcpError::PdfCo(PdfCoApiError::RequestFailed {
                status: status.as_u16(),
                message,
            }));
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| {
            PdfMcpError::PdfCo(PdfCoApiError::UnexpectedResponse {
                message: format!("{} returned invalid JSON: {}", operation, e),
            })
        })?;

        let envelope = ApiStatus::deserialize(&value).unwrap_or_default();
        if envelope.error {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("{} failed without an error message", operation));
            tracing::warn!("PDF.co {} reported an error: {}", operation, message);
            return Err(PdfMcpError::PdfCo(PdfCoApiError::ApiReported { message }));
        }

        T::deserialize(value).map_err(|e| {
            PdfMcpError::PdfCo(PdfCoApiError::UnexpectedResponse {
                message: format!("{}: {}", operation, e),
            })
        })
    }
}
