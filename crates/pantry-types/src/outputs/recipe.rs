use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single recipe as produced by the model.
///
/// Every field is required; the `deny_unknown_fields` attribute makes the
/// derived schema closed (`additionalProperties: false`), which strict
/// structured-output modes demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Recipe {
    /// The name of the recipe.
    pub name: String,
    /// The ingredients required for the recipe, with quantities.
    pub ingredients: String,
    /// Step-by-step cooking instructions.
    pub instructions: String,
    /// Nutritional information (calories, fat, protein, carbs).
    pub nutritional_information: String,
    /// A descriptive prompt for an image generation model to create a photo of the finished dish.
    pub image_prompt: String,
}

impl Recipe {
    /// Wire names of the fields that are blank.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("ingredients", &self.ingredients),
            ("instructions", &self.instructions),
            ("nutritionalInformation", &self.nutritional_information),
            ("imagePrompt", &self.image_prompt),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Reject a recipe with blank fields.
    pub fn ensure_complete(&self) -> Result<(), IncompleteRecipe> {
        let fields = self.blank_fields();
        if fields.is_empty() {
            return Ok(());
        }
        Err(IncompleteRecipe {
            index: 0,
            fields,
        })
    }
}

/// Recipe suggestions returned to callers, ordered as the model produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecipeSuggestions {
    /// An array of recipe suggestions.
    pub recipes: Vec<Recipe>,
}

impl RecipeSuggestions {
    /// Wrap a single recipe.
    pub fn single(recipe: Recipe) -> Self {
        Self {
            recipes: vec![recipe],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Reject the whole response if any recipe has blank fields.
    pub fn ensure_complete(&self) -> Result<(), IncompleteRecipe> {
        for (index, recipe) in self.recipes.iter().enumerate() {
            recipe
                .ensure_complete()
                .map_err(|err| IncompleteRecipe { index, ..err })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("recipe #{index} has blank fields: {}", .fields.join(", "))]
pub struct IncompleteRecipe {
    pub index: usize,
    pub fields: Vec<&'static str>,
}
