use pantry_core::error::PantryError;
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between sending a `chat/completions` request
/// and holding the assistant message.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// Transport failure, including timeouts and request encoding.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body is not a completion envelope.
    #[error("couldn't parse response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("OpenAI returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Well-formed envelope without a usable answer (no choices, refusal,
    /// truncated output).
    #[error("unusable completion: {0}")]
    Format(String),
}

impl From<OpenAiError> for PantryError {
    fn from(value: OpenAiError) -> Self {
        PantryError::Backend(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_name_the_response_body() {
        let err: OpenAiError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("couldn't parse response body: "));
    }
}
