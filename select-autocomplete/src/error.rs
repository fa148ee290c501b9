//! Error types

/// Error resolving a configured field on an option record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The record does not expose the configured field.
    #[error("Option {index} has no field '{field}'")]
    Missing { field: String, index: usize },

    /// The display field exists but cannot be shown as text.
    #[error("Option {index} field '{field}' is not text: got {kind}")]
    NotText {
        field: String,
        index: usize,
        kind: &'static str,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>, index: usize) -> Self {
        Self::Missing {
            field: field.into(),
            index,
        }
    }

    /// Creates a new not-text error.
    pub fn not_text(field: impl Into<String>, index: usize, kind: &'static str) -> Self {
        Self::NotText {
            field: field.into(),
            index,
            kind,
        }
    }
}

/// Errors surfaced by the select-autocomplete component.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
