//! Request schemas for the two ways of asking for recipes.
//!
//! Raw input arrives as loosely typed JSON from a form. [`FormRequest::parse`]
//! turns it into a typed request or an ordered list of field errors:
//!
//! 1. deserialize (a missing text field becomes `""`, a wrong JSON type is a
//!    form-level "Invalid input."),
//! 2. [`FormRequest::normalize`] (trim text, drop empty optional text),
//! 3. run the declared `validator` rules.
mod dish_name;
mod ingredients;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

pub use dish_name::DishNameRequest;
pub use ingredients::IngredientsRequest;

/// Message used when no field-specific message is available.
pub const INVALID_INPUT: &str = "Invalid input.";

/// Pseudo field name for errors that concern the whole form.
pub const FORM_FIELD: &str = "form";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field-level validation failures, in form order.
///
/// Never empty. `Display` shows the first message, which is what a user gets
/// to see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct FieldErrors(Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first_message())
    }
}

impl FieldErrors {
    /// Single form-level error for input of the wrong shape.
    pub fn invalid_input() -> Self {
        Self(vec![FieldError {
            field: FORM_FIELD.into(),
            message: INVALID_INPUT.into(),
        }])
    }

    /// Flatten `validator` errors, ordering them by `fields` first.
    pub fn from_validation(errors: &ValidationErrors, fields: &[&str]) -> Self {
        let by_field = errors.field_errors();

        let mut names: Vec<String> = fields
            .iter()
            .filter(|field| by_field.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        let mut rest: Vec<String> = by_field
            .keys()
            .map(|key| key.to_string())
            .filter(|key| !names.contains(key))
            .collect();
        rest.sort();
        names.extend(rest);

        let mut list = Vec::new();
        for name in names {
            let Some(field_errors) = by_field.get(name.as_str()) else {
                continue;
            };
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| INVALID_INPUT.to_string());
                list.push(FieldError {
                    field: name.clone(),
                    message,
                });
            }
        }

        if list.is_empty() {
            return Self::invalid_input();
        }
        Self(list)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn first_message(&self) -> &str {
        self.0
            .first()
            .map(|e| e.message.as_str())
            .unwrap_or(INVALID_INPUT)
    }

    /// Messages reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// A request that can be built from untrusted form input.
pub trait FormRequest: DeserializeOwned + Validate + Sized {
    /// Field names in the order the form presents them.
    const FIELDS: &'static [&'static str];

    /// Trim text fields and drop optional text that is empty.
    fn normalize(&mut self);

    fn parse(raw: Value) -> Result<Self, FieldErrors> {
        let mut request: Self = serde_json::from_value(raw).map_err(|err| {
            debug!(error = %err, "form input has the wrong shape");
            FieldErrors::invalid_input()
        })?;

        request.normalize();
        request
            .validate()
            .map_err(|errors| FieldErrors::from_validation(&errors, Self::FIELDS))?;

        Ok(request)
    }
}

/// Trimmed copy of an optional text field, `None` if nothing is left.
pub(crate) fn trimmed_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
