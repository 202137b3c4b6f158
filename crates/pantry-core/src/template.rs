//! Abstractions that tie a **prompt** to a concrete **model** and a **typed
//! response**.
//!
//! A prompt needs two traits to go from "some string fragments" to
//! "ready-to-send payload":
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the target model and the expected response
//!    type, whose JSON Schema is shipped with the request.
//!
//! ```rust
//! use pantry_core::template::{IntoPrompt, PromptTemplate};
//! use pantry_core::generic::{GenericMessage, GenericRole};
//! use pantry_core::model::{Model, OpenAiModel};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(deny_unknown_fields)]
//! struct Hello { greeting: String }
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HelloPrompt {
//!     type Output = Hello;
//!     const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);
//! }
//! ```
use std::any::Any;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::model::Model;

/// High-level description of a prompt.
///
/// * `Output` – the strongly-typed Rust struct expected from the LLM.
/// * `MODEL`  – the identifier of the model that should handle the request.
pub trait PromptTemplate: IntoPrompt {
    /// Type produced by the LLM and returned to the caller.
    type Output: JsonSchema + for<'de> Deserialize<'de> + Any + Send;

    /// Logical model identifier. The back-end maps this to its own naming
    /// scheme.
    const MODEL: Model;
}

/// Converts a value into a series of chat messages.
///
/// The `Message` type is associated so a back-end can require its own richer
/// struct without resorting to dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`GenericMessage`](crate::generic::GenericMessage) is a prompt
/// of its own.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
