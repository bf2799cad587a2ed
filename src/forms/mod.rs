//! Generic, schema-driven form handling.

pub mod search;

pub use search::{FieldPrompt, InputMode, SearchForm, field_prompt};
