//! Turns the free-text recipe fields into lists for display.
use std::sync::LazyLock;

use pantry_types::outputs::Recipe;
use regex::Regex;
use serde::Serialize;

static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*|\n").expect("valid list separator regex"));
static STEP_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\d+\.\s*").expect("valid step marker regex"));
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid leading number regex"));

fn non_empty<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Ingredients separated by commas or newlines.
pub fn split_list(text: &str) -> Vec<String> {
    non_empty(LIST_SEPARATOR.split(text))
}

/// Numbered steps (`1. … \n2. …`), falling back to one step per line.
/// A `N.` prefix left on any step is removed.
pub fn split_instructions(text: &str) -> Vec<String> {
    let mut steps = non_empty(STEP_MARKER.split(text));
    if steps.len() <= 1 && text.contains('\n') {
        steps = non_empty(text.lines());
    }
    steps
        .into_iter()
        .map(|step| LEADING_NUMBER.replace(&step, "").trim().to_owned())
        .filter(|step| !step.is_empty())
        .collect()
}

/// Comma-separated nutrition facts.
pub fn split_nutrition(text: &str) -> Vec<String> {
    non_empty(text.split(','))
}

/// View model of a recipe card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub nutrition: Vec<String>,
    pub image_prompt: String,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.name.trim().to_owned(),
            ingredients: split_list(&recipe.ingredients),
            steps: split_instructions(&recipe.instructions),
            nutrition: split_nutrition(&recipe.nutritional_information),
            image_prompt: recipe.image_prompt.trim().to_owned(),
        }
    }
}
