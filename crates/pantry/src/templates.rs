//! The two recipe prompts.
//!
//! Both share the same system fragment ([`SYSTEM_ROLE`]) and render their
//! user instruction with [`PromptBuilder`]. Optional request fields are plain
//! `if` branches, so an absent field leaves no trace in the prompt.
use pantry_core::{
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenAiModel},
    template::{IntoPrompt, PromptTemplate},
};
use pantry_prompt::{builder::PromptBuilder, chain::PromptChain};
use pantry_types::{
    fragments::StaticFragment,
    outputs::{Recipe, RecipeSuggestions},
    requests::{DishNameRequest, IngredientsRequest},
};

/// Role and tone shared by every recipe prompt.
pub const SYSTEM_ROLE: &str = "You are a recipe suggestion AI. \
Your language should be simple and easy to understand for a general audience; \
avoid jargon or overly technical cooking terms.";

const JSON_ONLY: &str =
    "Output in JSON format, matching the provided response schema exactly. Do not add any other text.";

/// "Scale the recipe(s) to serve N people." clause.
fn servings_clause(what: &str, people: i64) -> String {
    let noun = if people == 1 { "person" } else { "people" };
    format!("Scale {what} to serve {people} {noun}.")
}

/// Suggest three recipes for the ingredients at hand.
#[derive(Debug, Clone)]
pub struct RecipeSuggestionsPrompt {
    pub request: IngredientsRequest,
}

impl RecipeSuggestionsPrompt {
    pub fn new(request: IngredientsRequest) -> Self {
        Self { request }
    }

    /// The user instruction sent after [`SYSTEM_ROLE`].
    pub fn render(&self) -> String {
        let request = &self.request;

        let mut builder = PromptBuilder::new()
            .add_line("Given the ingredients a user has available, suggest recipes they can make.")
            .add_blank_line()
            .add_key_value("Ingredients", &request.ingredients);
        if let Some(restrictions) = &request.dietary_restrictions {
            builder = builder.add_key_value("Dietary Restrictions", restrictions);
        }
        if let Some(people) = request.number_of_people {
            builder = builder.add_line(servings_clause("every recipe", people));
        }

        builder = builder
            .add_blank_line()
            .add_line("Suggest exactly 3 recipes. For each recipe:")
            .add_numbered_list([
                "Provide the name of the recipe.",
                "List all required ingredients with quantities, scaled to the number of servings. \
                 If a common ingredient is missing, suggest a common substitute.",
                "Provide simple, step-by-step cooking instructions.",
                "Provide nutritional information (calories, fat, protein, carbs).",
                "Provide a short, descriptive prompt for generating a photorealistic image of the finished dish.",
            ]);
        if request.dietary_restrictions.is_some() {
            builder = builder.add_line("Ensure that the recipes adhere to the dietary restrictions.");
        }

        builder.add_line(JSON_ONLY).finalize()
    }
}

impl IntoPrompt for RecipeSuggestionsPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::from(SYSTEM_ROLE))
            .with(GenericMessage::new(self.render(), GenericRole::User))
            .build()
    }
}

impl PromptTemplate for RecipeSuggestionsPrompt {
    type Output = RecipeSuggestions;
    const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);
}

/// Write one recipe for a dish the user names.
#[derive(Debug, Clone)]
pub struct RecipeFromNamePrompt {
    pub request: DishNameRequest,
}

impl RecipeFromNamePrompt {
    pub fn new(request: DishNameRequest) -> Self {
        Self { request }
    }

    pub fn render(&self) -> String {
        let request = &self.request;

        let mut builder = PromptBuilder::new()
            .add_line("Given a dish name, provide a recipe for it.")
            .add_blank_line()
            .add_key_value("Dish name provided by user", &request.dish_name);
        if let Some(people) = request.number_of_people {
            builder = builder.add_line(servings_clause("the recipe", people));
        }

        builder
            .add_blank_line()
            .add_line("Provide exactly one recipe:")
            .add_numbered_list([
                "Provide the name of the recipe, which must be the same as the dish name provided by the user.",
                "List all required ingredients with quantities.",
                "Provide simple, step-by-step cooking instructions.",
                "Provide nutritional information (calories, fat, protein, carbs).",
                "Provide a short, descriptive prompt for generating a photorealistic image of the finished dish.",
            ])
            .add_line(JSON_ONLY)
            .finalize()
    }
}

impl IntoPrompt for RecipeFromNamePrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::from(SYSTEM_ROLE))
            .with(GenericMessage::new(self.render(), GenericRole::User))
            .build()
    }
}

impl PromptTemplate for RecipeFromNamePrompt {
    type Output = Recipe;
    const MODEL: Model = Model::OpenAi(OpenAiModel::Gpt4oMini);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dietary_clause_only_when_given() {
        let plain = RecipeSuggestionsPrompt::new(IngredientsRequest::new("chicken, rice")).render();
        assert!(plain.contains("**Ingredients**: chicken, rice"));
        assert!(!plain.contains("Dietary Restrictions"));
        assert!(!plain.contains("adhere"));

        let vegan = RecipeSuggestionsPrompt::new(
            IngredientsRequest::new("tofu, rice").with_dietary_restrictions("Vegan"),
        )
        .render();
        assert!(vegan.contains("**Dietary Restrictions**: Vegan"));
        assert!(vegan.contains("adhere to the dietary restrictions"));
    }

    #[test]
    fn servings_clause_only_when_given() {
        let plain = RecipeSuggestionsPrompt::new(IngredientsRequest::new("eggs")).render();
        assert!(!plain.contains("to serve"));

        let four = RecipeSuggestionsPrompt::new(
            IngredientsRequest::new("eggs").with_number_of_people(4),
        )
        .render();
        assert!(four.contains("Scale every recipe to serve 4 people."));

        let one = RecipeFromNamePrompt::new(DishNameRequest::new("Omelette").with_number_of_people(1))
            .render();
        assert!(one.contains("Scale the recipe to serve 1 person."));
    }

    #[test]
    fn asks_for_three_recipes() {
        let md = RecipeSuggestionsPrompt::new(IngredientsRequest::new("beans")).render();
        assert!(md.contains("exactly 3 recipes"));
        assert!(md.contains("5. Provide a short, descriptive prompt"));
    }

    #[test]
    fn dish_name_is_embedded_verbatim() {
        let md = RecipeFromNamePrompt::new(DishNameRequest::new("Pad Thai")).render();
        assert!(md.contains("**Dish name provided by user**: Pad Thai"));
        assert!(md.contains("same as the dish name"));
    }

    #[test]
    fn system_fragment_comes_first() {
        let messages = RecipeFromNamePrompt::new(DishNameRequest::new("Pad Thai")).into_prompt();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[0].content.as_deref(), Some(SYSTEM_ROLE));
        assert_eq!(messages[1].role, GenericRole::User);
    }
}
