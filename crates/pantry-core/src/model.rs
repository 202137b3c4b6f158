//! Model identifiers used throughout the **pantry** workspace.
//!
//! Prompts name their model with an enum variant and each provider crate maps
//! the variant onto its own naming scheme, so application code never types
//! literal strings such as `"gpt-4o-mini"`.
//!
//! # Adding more models
//!
//! 1. Add the variant to the provider-specific enum (`OpenAiModel`).
//! 2. Update the mapping function in the provider crate
//!    (`pantry-openai::model_map::map_model`).
//!
//! ```rust
//! use pantry_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! ```

/// Universal identifier for an LLM model.
///
/// * `OpenAi` – enumerated list of supported OpenAI models.
/// * `Custom` – any provider / model name not covered by a dedicated enum
///   (self-hosted or OpenAI-compatible endpoints).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
    Custom(&'static str),
}

/// Models known to support JSON-schema structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4o,
    Gpt4oMini,
    Gpt4_1,
    Gpt4_1Mini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
