use std::{env, sync::Arc, time::Duration};

use pantry_core::error::{PantryError, Result};

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`pantry_core::provider::ChatCompletionProvider`].
///
/// It stores the API key and base URL and owns a shareable,
/// connection-pooled `reqwest::Client`. All user-facing functionality sits on
/// the generic [`pantry_core::PantryClient`] once the adapter is plugged in.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use pantry_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `OPENAI_API_KEY` and, if present, `OPENAI_BASE_URL` from the
    /// environment.
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok().filter(|url| !url.is_empty()),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at an OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request HTTP timeout. Defaults to 30 s.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`PantryError::Invalid`] – if the API key is missing.
    /// * [`PantryError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self.api_key.filter(|key| !key.is_empty()).ok_or_else(|| {
            PantryError::Invalid("missing env variable: `OPENAI_API_KEY`".into())
        })?;

        let client = OpenAiClient::new(api_key, self.timeout.unwrap_or(DEFAULT_TIMEOUT))?;
        let client = match self.base_url {
            Some(base_url) => client.with_base_url(base_url),
            None => client,
        };

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}
