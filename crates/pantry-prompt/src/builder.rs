//! Builder-style helper for constructing **Markdown prompts**.
//!
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the syntax. Every method returns `self`, so optional clauses are
//! plain `if` branches around a re-assignment:
//!
//! ```rust
//! use pantry_prompt::builder::PromptBuilder;
//!
//! let servings: Option<u32> = Some(4);
//!
//! let mut builder = PromptBuilder::new()
//!     .add_line("Suggest a dinner.")
//!     .add_key_value("Ingredients", "rice, beans");
//! if let Some(n) = servings {
//!     builder = builder.add_key_value("Servings", n);
//! }
//! let md = builder.finalize();
//!
//! assert!(md.contains("**Servings**: 4"));
//! ```
//!
//! Newlines and whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled markdown.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a key–value pair with the key in **bold**:
    /// `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Add a numbered list, one item per line, starting at `1.`.
    pub fn add_numbered_list<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (idx, item) in items.into_iter().enumerate() {
            writeln!(self.buffer, "{}. {item}", idx + 1).expect("failed to write buffer");
        }
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_call_order() {
        let md = PromptBuilder::new()
            .add_line("Task")
            .add_blank_line()
            .add_key_value("Dish name", "Pad Thai")
            .add_numbered_list(["Name it.", "List ingredients."])
            .finalize();

        assert_eq!(
            md,
            "Task\n\n**Dish name**: Pad Thai\n1. Name it.\n2. List ingredients.\n"
        );
    }

    #[test]
    fn empty_list_adds_nothing() {
        let md = PromptBuilder::new()
            .add_numbered_list(Vec::<String>::new())
            .finalize();
        assert!(md.is_empty());
    }
}
