use std::env;

use pantry::{
    PantryClient,
    actions::RecipeActions,
    card::RecipeCard,
    openai::OpenAiAdapterBuilder,
    types::outputs::{ActionResult, RecipeSuggestions},
};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt};

/// # Recipes from the command line
///
/// Runs both actions against OpenAI and prints the recipe cards.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…
/// cargo run -p pantry --example recipe_suggestions -- "chicken, rice" Vegan
/// RUST_LOG=pantry=debug,pantry_core=debug cargo run -p pantry --example recipe_suggestions
/// ```
///
/// The first argument is the ingredient list, the optional second one the
/// dietary restriction. A recipe for "Pad Thai" is fetched afterwards.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let ingredients = args.next().unwrap_or_else(|| "chicken, rice, broccoli".into());
    let restrictions = args.next().unwrap_or_default();

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let actions = RecipeActions::new(PantryClient::new(backend));

    let result = actions
        .get_recipe_suggestions_action(json!({
            "ingredients": ingredients,
            "dietaryRestrictions": restrictions,
            "numberOfPeople": 2
        }))
        .await;
    print_cards(result)?;

    let result = actions
        .get_recipe_by_name_action(json!({ "dishName": "Pad Thai" }))
        .await;
    print_cards(result)?;

    Ok(())
}

fn print_cards(result: ActionResult<RecipeSuggestions>) -> anyhow::Result<()> {
    match result {
        ActionResult::Success(suggestions) => {
            for recipe in &suggestions.recipes {
                let card = RecipeCard::from(recipe);
                println!("{}", serde_json::to_string_pretty(&card)?);
            }
        }
        ActionResult::Failure(message) => println!("Error: {message}"),
    }
    Ok(())
}
