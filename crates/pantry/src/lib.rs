//! # `pantry` – recipe suggestions from what is in the kitchen
//!
//! The umbrella crate ties the workspace together and adds the recipe
//! domain on top of it:
//!
//! | Crate / module           | What it provides                                                           |
//! |--------------------------|----------------------------------------------------------------------------|
//! | **`pantry-core`**        | Provider traits, generic client, JSON-schema helpers, errors               |
//! | **`pantry-prompt`**      | `PromptBuilder` and `PromptChain`                                          |
//! | **`pantry-types`**       | Request/response schemas, `ActionResult`, static prompt fragments          |
//! | **`pantry-openai`**      | `chat/completions` adapter *(feature `openai`, on by default)*             |
//! | [`templates`]            | The two recipe prompts                                                     |
//! | [`flows`]                | One typed model call per request                                           |
//! | [`actions`]              | Form input in, [`ActionResult`](types::outputs::ActionResult) out          |
//! | [`card`]                 | Splits recipe text into lists for display                                  |
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use pantry::{PantryClient, actions::RecipeActions, openai::OpenAiAdapterBuilder};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = OpenAiAdapterBuilder::new_from_env().build()?;
//!     let actions = RecipeActions::new(PantryClient::new(backend));
//!
//!     let result = actions
//!         .get_recipe_suggestions_action(json!({ "ingredients": "chicken, rice" }))
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```
pub use pantry_core::*;

pub use pantry_prompt as prompt;
pub use pantry_types as types;

#[cfg(feature = "openai")]
pub use pantry_openai as openai;

pub mod actions;
pub mod card;
pub mod flows;
pub mod templates;
