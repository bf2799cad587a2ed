use std::collections::HashMap;

use crate::schema::{FieldConfig, FieldType};

/// Input affordance a field asks the UI layer for. The terminal front-end only
/// hints with it; nothing is validated or coerced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Free-form capitalized text.
    Default,
    /// Non-capitalizing, email-oriented entry.
    EmailAddress,
    /// Numeric phone entry.
    PhonePad,
}

/// Everything the UI layer needs to present one field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPrompt {
    pub label: String,
    pub placeholder: Option<String>,
    /// Informational hint shown under the input, e.g. the date pattern.
    pub hint: Option<String>,
    pub mode: InputMode,
    pub required: bool,
}

/// Derives the input affordance for a field. `select` has no real choice
/// control and degrades to plain text, as does any future unrecognized kind.
#[must_use]
pub fn field_prompt(config: &FieldConfig) -> FieldPrompt {
    let mode = match config.field_type {
        FieldType::Email => InputMode::EmailAddress,
        FieldType::Phone => InputMode::PhonePad,
        FieldType::Text | FieldType::Date | FieldType::Select => InputMode::Default,
    };
    let (placeholder, hint) = match config.field_type {
        FieldType::Date => (
            config
                .placeholder
                .clone()
                .or_else(|| Some("YYYY-MM-DD".to_string())),
            Some("Format: YYYY-MM-DD".to_string()),
        ),
        _ => (config.placeholder.clone(), None),
    };
    FieldPrompt {
        label: config.label.clone(),
        placeholder,
        hint,
        mode,
        required: config.required,
    }
}

/// Current state of the configuration-driven search form: one string value per
/// field key, last write wins.
#[derive(Clone, Debug, Default)]
pub struct SearchForm {
    values: HashMap<String, String>,
}

impl SearchForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for a field, empty string when unset.
    #[must_use]
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Records the full current string for a field. Called on every change.
    pub fn set_value(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Whether any field holds a non-blank value after trimming. The clear
    /// affordance is shown exactly when this is true.
    #[must_use]
    pub fn has_values(&self) -> bool {
        self.values.values().any(|v| !v.trim().is_empty())
    }

    /// Submission payload: trimmed values for exactly the keys whose trimmed
    /// value is non-empty.
    #[must_use]
    pub fn submit(&self) -> HashMap<String, String> {
        self.values
            .iter()
            .filter_map(|(key, value)| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some((key.clone(), trimmed.to_string()))
                }
            })
            .collect()
    }
}
