use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::debug;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP client for OpenAI's *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response), no retries.
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl OpenAiClient {
    /// Build a default `reqwest` client with the given request timeout.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(api_key, http, None))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base = base_url.as_ref().trim_end_matches('/').to_owned();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let url = format!("{}/chat/completions", self.base);
        debug!(%url, model = %request.model, messages = request.messages.len(), "sending chat completion");

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = OpenAiClient::with_http(
            "key",
            HttpClient::new(),
            Some("http://localhost:8080/v1/".into()),
        );
        assert_eq!(client.base_url(), "http://localhost:8080/v1");

        let client = OpenAiClient::with_http("key", HttpClient::new(), None);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
