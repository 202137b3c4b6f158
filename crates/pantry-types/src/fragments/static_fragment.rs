//! A minimal fragment that injects a *static* string into the prompt.
//!
//! Use this for pre-determined text (role description, tone rules) that never
//! changes between invocations.
//!
//! ```rust
//! use pantry_types::fragments::StaticFragment;
//! use pantry_core::generic::GenericRole;
//!
//! let sys_msg = StaticFragment::new(
//!     "You are a friendly home cook.",
//!     GenericRole::System,
//! );
//! ```
//!
//! The `From<&str>` impl defaults to `GenericRole::System` since system
//! messages are the most common static fragments.

use pantry_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed static string bundled with an LLM chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

impl<'a> From<&'a str> for StaticFragment<'a> {
    fn from(value: &'a str) -> Self {
        Self((value, GenericRole::System))
    }
}

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let (text, role) = self.0;
        vec![GenericMessage::new(text.to_string(), role)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_system_role() {
        let messages = StaticFragment::from("Keep it simple.").into_prompt();
        assert_eq!(
            messages,
            [GenericMessage::new(
                "Keep it simple.".into(),
                GenericRole::System
            )]
        );
    }
}
