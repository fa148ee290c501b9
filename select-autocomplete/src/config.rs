//! Component configuration.

use serde::{Deserialize, Serialize};

use crate::error::SelectError;
use crate::option::FieldNames;

/// Visual variant of the form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Standard,
    Fill,
    Outline,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Fill => "fill",
            Self::Outline => "outline",
        }
    }
}

/// Element id overrides for the rendered sub-elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSelectors {
    pub input_field: String,
    pub select_field: String,
    pub clear_field_icon: String,
    pub clear_selection: String,
    #[serde(default)]
    pub search_field: Option<String>,
}

impl Default for ElementSelectors {
    fn default() -> Self {
        Self {
            input_field: "select-autocomplete-input".into(),
            select_field: "select-autocomplete-select".into(),
            clear_field_icon: "select-autocomplete-clear-icon".into(),
            clear_selection: "select-autocomplete-clear-selection".into(),
            search_field: None,
        }
    }
}

/// Static settings of a select-autocomplete.
///
/// Every field has a default, so a host can deserialize a partial JSON
/// object:
///
/// ```ignore
/// let config = SelectConfig::from_json(r#"{ "displayField": "name", "labelCount": 2 }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    /// Placeholder of the search box inside the dropdown.
    pub search_placeholder: String,
    /// Placeholder of the field when nothing is selected.
    pub placeholder: Option<String>,
    /// Record field holding the label.
    pub display_field: String,
    /// Record field holding the identity key.
    pub value_field: String,
    pub error_message: String,
    pub show_error: bool,
    pub multiple: bool,
    /// How many labels the field shows before collapsing into `(+K) others`.
    pub label_count: usize,
    pub appearance: Appearance,
    pub selectors: Option<ElementSelectors>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            search_placeholder: "search...".into(),
            placeholder: None,
            display_field: "display".into(),
            value_field: "value".into(),
            error_message: "Field is required".into(),
            show_error: false,
            multiple: true,
            label_count: 1,
            appearance: Appearance::Standard,
            selectors: None,
        }
    }
}

impl SelectConfig {
    /// Create a config with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, SelectError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the change cycle cannot work with.
    pub fn validate(&self) -> Result<(), SelectError> {
        if self.display_field.is_empty() {
            return Err(SelectError::Config("display field name is empty".into()));
        }
        if self.value_field.is_empty() {
            return Err(SelectError::Config("value field name is empty".into()));
        }
        Ok(())
    }

    /// The configured field names.
    pub fn field_names(&self) -> FieldNames {
        FieldNames::new(&self.display_field, &self.value_field)
    }

    /// Element ids, falling back to the defaults.
    pub fn selectors_or_default(&self) -> ElementSelectors {
        self.selectors.clone().unwrap_or_default()
    }

    pub fn with_search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_placeholder = text.into();
        self
    }

    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Set the display and value field names.
    pub fn with_fields(mut self, display: impl Into<String>, value: impl Into<String>) -> Self {
        self.display_field = display.into();
        self.value_field = value.into();
        self
    }

    pub fn with_error(mut self, message: impl Into<String>, show: bool) -> Self {
        self.error_message = message.into();
        self.show_error = show;
        self
    }

    /// Switch to single-select mode.
    pub fn single(mut self) -> Self {
        self.multiple = false;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_label_count(mut self, count: usize) -> Self {
        self.label_count = count;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_selectors(mut self, selectors: ElementSelectors) -> Self {
        self.selectors = Some(selectors);
        self
    }
}
