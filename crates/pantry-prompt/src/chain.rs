//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](pantry_core::template::IntoPrompt).
//!
//! ```text
//! ┌────────────────┐    IntoPrompt     ┌────────────────┐
//! │ StaticFragment │ ─────────────────►│ Vec<Message>   │
//! ├────────────────┤                   ├────────────────┤
//! │ GenericMessage │ ─────────────────►│ Vec<Message>   │
//! └────────────────┘                   └────────────────┘
//!            ▲                                     │
//!            └────────── PromptChain::build() ◄────┘
//! ```
//!
//! Recipe prompts are composed from a shared role description followed by the
//! rendered user instruction; `PromptChain` lines these fragments up without
//! mutable vectors or `extend()` calls.
//!
//! The generic parameter `Message` allows back-ends to plug in their own,
//! richer message types while reusing the same chaining logic.
use pantry_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is private so the only way to obtain the result is
/// through [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    ///
    /// ```rust
    /// # use pantry_prompt::chain::PromptChain;
    /// # use pantry_core::generic::{GenericMessage, GenericRole};
    /// #
    /// # let msg = GenericMessage::new("hi".into(), GenericRole::User);
    /// let vec = PromptChain::new()
    ///     .with(msg)
    ///     .build();
    /// assert_eq!(vec.len(), 1);
    /// ```
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pantry_core::generic::{GenericMessage, GenericRole};

    use super::*;

    #[test]
    fn keeps_fragment_order() {
        let messages = PromptChain::new()
            .with(GenericMessage::new("rules".into(), GenericRole::System))
            .with(GenericMessage::new("question".into(), GenericRole::User))
            .build();

        let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, [GenericRole::System, GenericRole::User]);
    }
}
