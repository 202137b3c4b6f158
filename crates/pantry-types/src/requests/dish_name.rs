use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FormRequest;

/// "Search by dish name" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DishNameRequest {
    /// Name of the dish the user wants a recipe for.
    #[serde(default)]
    #[validate(length(min = 3, message = "Please enter at least three characters."))]
    pub dish_name: String,

    /// Number of people the recipe should serve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Please enter a number of people greater than 0."))]
    pub number_of_people: Option<i64>,
}

impl DishNameRequest {
    pub fn new(dish_name: impl Into<String>) -> Self {
        Self {
            dish_name: dish_name.into(),
            number_of_people: None,
        }
    }

    pub fn with_number_of_people(mut self, people: i64) -> Self {
        self.number_of_people = Some(people);
        self
    }
}

impl FormRequest for DishNameRequest {
    const FIELDS: &'static [&'static str] = &["dish_name", "number_of_people"];

    fn normalize(&mut self) {
        self.dish_name = self.dish_name.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_dish_name() {
        let request = DishNameRequest::parse(json!({ "dishName": " Pad Thai " })).unwrap();
        assert_eq!(request, DishNameRequest::new("Pad Thai"));
    }

    #[test]
    fn rejects_short_name_and_bad_servings() {
        let errors =
            DishNameRequest::parse(json!({ "dishName": "Pa", "numberOfPeople": -1 })).unwrap_err();

        assert_eq!(errors.errors().len(), 2);
        assert_eq!(
            errors.first_message(),
            "Please enter at least three characters."
        );
    }

    #[test]
    fn accepts_servings() {
        let request =
            DishNameRequest::parse(json!({ "dishName": "Lasagna", "numberOfPeople": 6 })).unwrap();
        assert_eq!(request.number_of_people, Some(6));
    }
}
