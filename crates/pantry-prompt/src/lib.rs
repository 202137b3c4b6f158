//! Prompt composition helpers: [`builder::PromptBuilder`] renders markdown
//! instructions, [`chain::PromptChain`] lines up message fragments.
pub mod builder;
pub mod chain;
