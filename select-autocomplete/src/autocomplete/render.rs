//! Render model for the select-autocomplete.
//!
//! The component does not draw anything itself. `render` describes what a
//! host should draw; element ids come from the configured selectors.

use crate::config::Appearance;
use crate::option::OptionKey;

use super::SelectAutocomplete;

/// Everything a host needs to draw the component.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownView {
    pub field: FieldView,
    /// Present while the dropdown is open.
    pub panel: Option<PanelView>,
    /// Error line, when the caller asked for one.
    pub error: Option<String>,
}

/// The closed form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub id: String,
    /// Display string, or the placeholder.
    pub text: String,
    pub is_placeholder: bool,
    pub disabled: bool,
    pub open: bool,
    pub appearance: Appearance,
    /// Id of the clear-field icon, present while something is selected.
    pub clear_icon: Option<String>,
}

/// The open dropdown panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub id: String,
    pub search: SearchView,
    /// Checkbox state, present in multi-select mode with visible options.
    pub select_all: Option<bool>,
    pub clear_selection_id: String,
    /// Every option in display order, hidden ones included.
    pub rows: Vec<RowView>,
}

impl PanelView {
    /// Rows inside the filtered view.
    pub fn visible_rows(&self) -> impl Iterator<Item = &RowView> {
        self.rows.iter().filter(|row| !row.hidden)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub id: Option<String>,
    pub placeholder: String,
    pub query: String,
}

/// One option row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub key: OptionKey,
    pub label: String,
    pub selected: bool,
    pub hidden: bool,
}

impl<R> SelectAutocomplete<R> {
    /// Describe the component in its current state.
    pub fn render(&self) -> DropdownView {
        let config = self.config();
        let selectors = config.selectors_or_default();
        let display = self.display_string();
        let open = self.is_open();

        log::trace!(
            "SelectAutocomplete::render open={} options={} selected={}",
            open,
            self.options().len(),
            self.selection().len()
        );

        let field = FieldView {
            id: selectors.input_field.clone(),
            is_placeholder: display.is_empty(),
            text: self.field_text(),
            disabled: self.is_disabled(),
            open,
            appearance: config.appearance,
            clear_icon: (!self.selection().is_empty()).then(|| selectors.clear_field_icon.clone()),
        };

        let panel = open.then(|| {
            let has_visible = self.filtered_options().next().is_some();
            PanelView {
                id: selectors.select_field.clone(),
                search: SearchView {
                    id: selectors.search_field.clone(),
                    placeholder: config.search_placeholder.clone(),
                    query: self.search_query().to_string(),
                },
                select_all: (self.is_multiple() && has_visible).then_some(self.select_all_checked()),
                clear_selection_id: selectors.clear_selection.clone(),
                rows: self
                    .options()
                    .iter()
                    .map(|option| RowView {
                        key: option.key().clone(),
                        label: option.label().to_string(),
                        selected: self.selection().contains(option.key()),
                        hidden: self.is_option_hidden(option),
                    })
                    .collect(),
            }
        });

        DropdownView {
            field,
            panel,
            error: self.error_message().map(str::to_string),
        }
    }
}
