//! Generic message and role types used by the *pantry-core* crate.
//!
//! They mirror the concepts exposed by most provider APIs ("system", "user",
//! "assistant") and convert into provider-specific structs via a simple
//! `From`/`Into`. Keep them minimal: data that only one backend needs belongs
//! on that backend's message type.
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lightweight container representing a single chat message that is
/// independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 content. Markdown is fine.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: Option<String>,
    pub role: GenericRole,
    pub name: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use pantry_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful cook.".into(),
    ///                               GenericRole::System);
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            content: Some(message),
            role,
            name: None,
        }
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// "System" messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

#[derive(Debug)]
pub struct GenericChatCompletionResponse<T> {
    pub content: T,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

/// Structured-output contract attached to a completion request.
///
/// `schema` is a fully inlined JSON Schema, `name` an identifier the provider
/// may echo back (OpenAI requires `^[a-zA-Z0-9_-]+$`).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFormat {
    pub name: String,
    pub schema: Value,
}
