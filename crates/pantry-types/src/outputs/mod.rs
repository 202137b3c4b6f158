mod action_result;
mod recipe;

pub use action_result::ActionResult;
pub use recipe::{IncompleteRecipe, Recipe, RecipeSuggestions};
