//! Single-attempt recipe flows: validated request in, validated recipes out.
//!
//! A flow renders its template, runs exactly one typed completion and checks
//! the parsed answer. Nothing is retried.
use pantry_core::{error::PantryError, generic::GenericMessage, provider::PromptExecutionProvider};
use pantry_types::{
    outputs::{Recipe, RecipeSuggestions},
    requests::{DishNameRequest, IngredientsRequest},
};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::templates::{RecipeFromNamePrompt, RecipeSuggestionsPrompt};

#[derive(Debug, Error)]
pub enum FlowError {
    /// The model answered, but not with the response shape.
    #[error("model output does not match the response schema: {0}")]
    SchemaMismatch(String),

    /// The completion call itself failed.
    #[error("model unavailable")]
    ModelUnavailable(#[source] PantryError),
}

impl From<PantryError> for FlowError {
    fn from(err: PantryError) -> Self {
        if err.is_schema_mismatch() {
            Self::SchemaMismatch(err.to_string())
        } else {
            Self::ModelUnavailable(err)
        }
    }
}

/// Ask for three recipes that use the given ingredients.
///
/// An empty answer yields zero recipes; deciding what that means is up to
/// the caller.
#[instrument(skip_all)]
pub async fn generate_recipe_suggestions<E>(
    provider: &E,
    request: &IngredientsRequest,
) -> Result<RecipeSuggestions, FlowError>
where
    E: PromptExecutionProvider,
    GenericMessage: Into<E::Message>,
{
    let prompt = RecipeSuggestionsPrompt::new(request.clone());
    let response = provider.prompt_execute(prompt).await?;

    let suggestions = response.content.unwrap_or_default();
    suggestions.ensure_complete().map_err(|err| {
        warn!(error = %err, "incomplete recipe suggestions");
        FlowError::SchemaMismatch(err.to_string())
    })?;

    debug!(recipes = suggestions.len(), "recipe suggestions generated");
    Ok(suggestions)
}

/// Ask for the recipe of a named dish. `None` if the model returned nothing.
#[instrument(skip_all)]
pub async fn generate_recipe_from_name<E>(
    provider: &E,
    request: &DishNameRequest,
) -> Result<Option<Recipe>, FlowError>
where
    E: PromptExecutionProvider,
    GenericMessage: Into<E::Message>,
{
    let prompt = RecipeFromNamePrompt::new(request.clone());
    let response = provider.prompt_execute(prompt).await?;

    let Some(recipe) = response.content else {
        debug!("model returned no recipe");
        return Ok(None);
    };
    recipe.ensure_complete().map_err(|err| {
        warn!(error = %err, "incomplete recipe");
        FlowError::SchemaMismatch(err.to_string())
    })?;

    Ok(Some(recipe))
}
