use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::GenericChatCompletionResponse,
    template::{IntoPrompt, PromptTemplate},
};

/// Typed counterpart of [`ChatCompletionProvider`](super::ChatCompletionProvider):
/// render a [`PromptTemplate`], ship its output schema, and deserialize the
/// reply into `P::Output`.
///
/// `content` is `None` when the model answered with nothing at all (empty
/// text or a bare `null`); a non-empty answer that does not match the schema
/// is an error.
pub trait PromptExecutionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the prompt and deserialize the provider's reply into
    /// `P::Output`.
    ///
    /// The constraint on `P::Message` guarantees at **compile time** that
    /// callers only feed the backend messages it understands.
    #[allow(clippy::type_complexity)]
    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<
        Box<
            dyn Future<Output = Result<GenericChatCompletionResponse<Option<P::Output>>>>
                + Send
                + 'p,
        >,
    >
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message>;
}
