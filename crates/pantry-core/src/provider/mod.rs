//! Provider traits implemented by back-ends (see `pantry-openai`) and by the
//! generic [`PantryClient`](crate::PantryClient).
mod chat_complete;
mod prompt_execute;

pub use chat_complete::{ChatCompleteParameters, ChatCompletionProvider};
pub use prompt_execute::PromptExecutionProvider;
