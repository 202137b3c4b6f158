//! Provider-agnostic building blocks of the **pantry** workspace: prompt
//! traits, generic chat messages, model identifiers, JSON-schema helpers and
//! the [`PantryClient`] that runs a typed prompt against one backend.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;

pub use client::PantryClient;
