use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{FormRequest, trimmed_optional};

/// "Search by ingredients" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IngredientsRequest {
    /// Comma-separated list of ingredients the user has available.
    #[serde(default)]
    #[validate(length(min = 3, message = "Please enter at least three characters."))]
    pub ingredients: String,

    /// Dietary restrictions such as vegetarian, vegan, or gluten-free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,

    /// Number of people the recipes should serve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Please enter a number of people greater than 0."))]
    pub number_of_people: Option<i64>,
}

impl IngredientsRequest {
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            dietary_restrictions: None,
            number_of_people: None,
        }
    }

    pub fn with_dietary_restrictions(mut self, restrictions: impl Into<String>) -> Self {
        self.dietary_restrictions = Some(restrictions.into());
        self
    }

    pub fn with_number_of_people(mut self, people: i64) -> Self {
        self.number_of_people = Some(people);
        self
    }
}

impl FormRequest for IngredientsRequest {
    const FIELDS: &'static [&'static str] =
        &["ingredients", "dietary_restrictions", "number_of_people"];

    fn normalize(&mut self) {
        self.ingredients = self.ingredients.trim().to_string();
        self.dietary_restrictions = trimmed_optional(self.dietary_restrictions.take());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::requests::{FORM_FIELD, INVALID_INPUT};

    #[test]
    fn parses_and_normalizes_form() {
        let request = IngredientsRequest::parse(json!({
            "ingredients": "  chicken, rice ",
            "dietaryRestrictions": "   ",
            "numberOfPeople": 2
        }))
        .unwrap();

        assert_eq!(
            request,
            IngredientsRequest::new("chicken, rice").with_number_of_people(2)
        );
    }

    #[test]
    fn short_ingredients_are_rejected() {
        let errors = IngredientsRequest::parse(json!({ "ingredients": "ab" })).unwrap_err();
        assert_eq!(
            errors.first_message(),
            "Please enter at least three characters."
        );
        assert_eq!(errors.errors()[0].field, "ingredients");
    }

    #[test]
    fn length_is_checked_after_trimming() {
        assert!(IngredientsRequest::parse(json!({ "ingredients": "  ab   " })).is_err());
    }

    #[test]
    fn missing_ingredients_fail_the_length_rule() {
        let errors = IngredientsRequest::parse(json!({})).unwrap_err();
        assert_eq!(
            errors.first_message(),
            "Please enter at least three characters."
        );
    }

    #[test]
    fn errors_follow_form_order() {
        let errors = IngredientsRequest::parse(json!({
            "ingredients": "a",
            "numberOfPeople": 0
        }))
        .unwrap_err();

        let fields: Vec<_> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["ingredients", "number_of_people"]);
        assert_eq!(
            errors.for_field("number_of_people").collect::<Vec<_>>(),
            ["Please enter a number of people greater than 0."]
        );
    }

    #[test]
    fn wrong_types_are_invalid_input() {
        let errors = IngredientsRequest::parse(json!({ "ingredients": 42 })).unwrap_err();
        assert_eq!(errors.errors()[0].field, FORM_FIELD);
        assert_eq!(errors.to_string(), INVALID_INPUT);

        assert!(IngredientsRequest::parse(json!("chicken")).is_err());
        assert!(
            IngredientsRequest::parse(json!({ "ingredients": "eggs", "numberOfPeople": 1.5 }))
                .is_err()
        );
    }

    #[test]
    fn null_optionals_are_absent() {
        let request = IngredientsRequest::parse(json!({
            "ingredients": "eggs, flour",
            "dietaryRestrictions": null,
            "numberOfPeople": null
        }))
        .unwrap();

        assert_eq!(request.dietary_restrictions, None);
        assert_eq!(request.number_of_people, None);
    }
}
