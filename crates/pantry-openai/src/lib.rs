//! OpenAI backend for pantry: a [`ChatCompletionProvider`] that posts one
//! `chat/completions` request per call and asks for strict JSON-schema
//! output.
//!
//! [`ChatCompletionProvider`]: pantry_core::provider::ChatCompletionProvider
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::OpenAiClient;
