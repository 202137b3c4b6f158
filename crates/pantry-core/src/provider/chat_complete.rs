use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage, ResponseFormat},
    model::Model,
};

/// A **backend** turns a chat prompt into a network call to a concrete
/// provider and hands back the assistant's reply.
///
/// This is the narrow capability the rest of the workspace is written
/// against: messages plus an optional response schema in, one assistant
/// message (or an error) out. A single call is a single attempt; retries,
/// if any, are the backend's business.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay free of
/// `async_trait`. The future must not borrow `self`; implementations clone
/// whatever shared handle they need into it.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute one chat completion round-trip.
    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<
        Box<dyn Future<Output = Result<GenericChatCompletionResponse<GenericMessage>>> + Send + 'p>,
    >
    where
        M: Into<Self::Message> + Send + Sync + 'p;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M> {
    pub messages: Vec<M>,
    pub model: Model,
    pub response_format: Option<ResponseFormat>,
}

impl<M> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            response_format: None,
        }
    }

    pub fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = Some(response_format);
        self
    }

    /// Convert every message, keeping all other settings.
    pub fn map_messages<N>(self, f: impl FnMut(M) -> N) -> ChatCompleteParameters<N> {
        ChatCompleteParameters {
            messages: self.messages.into_iter().map(f).collect(),
            model: self.model,
            response_format: self.response_format,
        }
    }
}
