//! Entry points for presentation code.
//!
//! Each action takes raw form input, validates it, runs one flow and folds
//! every outcome into an [`ActionResult`]. Nothing is thrown past this
//! boundary: the user sees a short sentence, operators get the cause in the
//! logs.
use pantry_core::{generic::GenericMessage, provider::PromptExecutionProvider};
use pantry_types::{
    outputs::{ActionResult, RecipeSuggestions},
    requests::{DishNameRequest, FormRequest, IngredientsRequest},
};
use serde_json::Value;
use tracing::{error, warn};

use crate::flows::{generate_recipe_from_name, generate_recipe_suggestions};

pub const NO_RECIPES_FOUND: &str =
    "Could not find any recipes with those ingredients. Try adding more!";
pub const SUGGESTIONS_FAILED: &str =
    "Failed to generate recipes. The AI may be busy, please try again.";
pub const NO_RECIPE_FOR_DISH: &str =
    "Could not find a recipe for that dish. Please try another name.";
pub const RECIPE_FAILED: &str =
    "Failed to generate the recipe. The AI may be busy, please try again.";

/// Stateless action handlers bound to one prompt executor, usually a
/// [`PantryClient`](pantry_core::PantryClient).
#[derive(Clone)]
pub struct RecipeActions<E> {
    provider: E,
}

impl<E> RecipeActions<E>
where
    E: PromptExecutionProvider,
    GenericMessage: Into<E::Message>,
{
    pub fn new(provider: E) -> Self {
        Self { provider }
    }

    /// Suggest recipes for a "search by ingredients" form.
    pub async fn get_recipe_suggestions_action(&self, raw: Value) -> ActionResult<RecipeSuggestions> {
        let request = match IngredientsRequest::parse(raw) {
            Ok(request) => request,
            Err(errors) => {
                warn!(?errors, "ingredients form rejected");
                return ActionResult::failure(errors.first_message());
            }
        };

        match generate_recipe_suggestions(&self.provider, &request).await {
            Ok(suggestions) if suggestions.is_empty() => ActionResult::failure(NO_RECIPES_FOUND),
            Ok(suggestions) => ActionResult::Success(suggestions),
            Err(err) => {
                error!(error = ?err, "recipe suggestions flow failed");
                ActionResult::failure(SUGGESTIONS_FAILED)
            }
        }
    }

    /// Fetch the recipe for a "search by dish name" form.
    ///
    /// The single recipe is wrapped into a one-element [`RecipeSuggestions`]
    /// so both actions share one result shape.
    pub async fn get_recipe_by_name_action(&self, raw: Value) -> ActionResult<RecipeSuggestions> {
        let request = match DishNameRequest::parse(raw) {
            Ok(request) => request,
            Err(errors) => {
                warn!(?errors, "dish name form rejected");
                return ActionResult::failure(errors.first_message());
            }
        };

        match generate_recipe_from_name(&self.provider, &request).await {
            Ok(Some(recipe)) => ActionResult::Success(RecipeSuggestions::single(recipe)),
            Ok(None) => ActionResult::failure(NO_RECIPE_FOR_DISH),
            Err(err) => {
                error!(error = ?err, "recipe from name flow failed");
                ActionResult::failure(RECIPE_FAILED)
            }
        }
    }
}
