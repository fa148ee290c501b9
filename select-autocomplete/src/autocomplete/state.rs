//! Select-autocomplete component state.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::host::{FormControl, FormControlHandle, Overlay, OverlayHandle, SearchField};
use crate::option::{OptionKey, OptionRecord, OptionStore, SelectOption, resolve_options};
use crate::selection::{Selection, compute_display_string, compute_select_all_flag};

use super::events::{ChangeCause, SelectionChange, SelectionEmitter, SubscriptionId};

/// Inputs supplied by the embedding application.
///
/// A new snapshot is handed to [`SelectAutocomplete::on_changes`] whenever
/// any of them changes.
#[derive(Debug, Clone)]
pub struct SelectInputs<R> {
    /// The option records. Required.
    pub options: Vec<R>,
    /// Disables the bound form control.
    pub disabled: bool,
    /// Keys to select, taking priority over the form control's value.
    pub preselected: Option<Vec<OptionKey>>,
    pub config: SelectConfig,
}

impl<R> Default for SelectInputs<R> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            disabled: false,
            preselected: None,
            config: SelectConfig::default(),
        }
    }
}

impl<R> SelectInputs<R> {
    pub fn new(options: Vec<R>) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn with_config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_preselected(mut self, keys: Vec<OptionKey>) -> Self {
        self.preselected = Some(keys);
        self
    }
}

/// A single/multi-select dropdown with inline search.
///
/// The component keeps the option list, the filtered view and the selection
/// consistent. The form control, overlay and search field belong to the
/// host and are reached through [`crate::host`] traits.
///
/// # Example
///
/// ```ignore
/// let control = FormControlHandle::new();
/// let mut select = SelectAutocomplete::new().with_form_control(control.clone());
/// select.subscribe(|change| log::info!("selected {:?}", change.values));
/// select.on_changes(SelectInputs::new(vec![
///     json!({ "display": "Banana", "value": 1 }),
///     json!({ "display": "apple", "value": 2 }),
/// ]))?;
///
/// select.filter_items("app");
/// select.toggle_select_all(true);
/// assert_eq!(select.display_string(), "apple");
/// ```
pub struct SelectAutocomplete<R> {
    inputs: SelectInputs<R>,
    store: OptionStore<R>,
    selection: Selection,
    select_all_checked: bool,
    form_control: Arc<dyn FormControl>,
    overlay: Option<Arc<dyn Overlay>>,
    search_field: Option<Arc<dyn SearchField>>,
    emitter: SelectionEmitter,
}

impl<R: std::fmt::Debug> std::fmt::Debug for SelectAutocomplete<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectAutocomplete")
            .field("store", &self.store)
            .field("selection", &self.selection)
            .field("select_all_checked", &self.select_all_checked)
            .field("has_overlay", &self.overlay.is_some())
            .field("has_search_field", &self.search_field.is_some())
            .field("emitter", &self.emitter)
            .finish_non_exhaustive()
    }
}

impl<R: OptionRecord + Clone> Default for SelectAutocomplete<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: OptionRecord + Clone> SelectAutocomplete<R> {
    /// Create a component with a fresh form control and overlay, no search
    /// field and no options.
    pub fn new() -> Self {
        Self {
            inputs: SelectInputs::default(),
            store: OptionStore::new(),
            selection: Selection::new(),
            select_all_checked: false,
            form_control: Arc::new(FormControlHandle::new()),
            overlay: Some(Arc::new(OverlayHandle::new())),
            search_field: None,
            emitter: SelectionEmitter::new(),
        }
    }

    /// Bind an externally owned form control.
    pub fn with_form_control(mut self, control: impl FormControl + 'static) -> Self {
        self.form_control = Arc::new(control);
        self
    }

    /// Attach the overlay widget.
    pub fn with_overlay(mut self, overlay: impl Overlay + 'static) -> Self {
        self.overlay = Some(Arc::new(overlay));
        self
    }

    /// Detach the overlay. Toggling becomes a no-op.
    pub fn without_overlay(mut self) -> Self {
        self.overlay = None;
        self
    }

    /// Attach the search field that receives focus on open.
    pub fn with_search_field(mut self, field: impl SearchField + 'static) -> Self {
        self.search_field = Some(Arc::new(field));
        self
    }

    // -------------------------------------------------------------------------
    // Change cycle
    // -------------------------------------------------------------------------

    /// Apply a new input snapshot.
    ///
    /// Syncs the form control's enabled state, re-sorts the options into
    /// canonical order, reseeds the selection (pre-selected keys first, then
    /// the form control's value) and moves selected options to the top.
    /// On error nothing is changed.
    pub fn on_changes(&mut self, inputs: SelectInputs<R>) -> Result<(), SelectError> {
        inputs.config.validate()?;
        let fields = inputs.config.field_names();
        let options = resolve_options(inputs.options.iter().cloned(), &fields)?;

        self.inputs = inputs;
        self.sync_enabled();
        self.store.load(options);

        if let Some(keys) = &self.inputs.preselected {
            self.selection.replace(keys.iter().cloned());
        } else if let Some(keys) = self.form_control.value() {
            self.selection.replace(keys);
        }
        if !self.inputs.config.multiple {
            self.selection.truncate_to_one();
        }

        self.store.rearrange(&self.selection);
        self.refresh_select_all();

        debug!(
            "SelectAutocomplete::on_changes options={} selected={} disabled={} multiple={}",
            self.store.len(),
            self.selection.len(),
            self.inputs.disabled,
            self.inputs.config.multiple
        );
        Ok(())
    }

    /// Edit the current inputs in place and run the change cycle.
    pub fn update_inputs(&mut self, f: impl FnOnce(&mut SelectInputs<R>)) -> Result<(), SelectError> {
        let mut next = self.inputs.clone();
        f(&mut next);
        self.on_changes(next)
    }

    /// Replace the option records.
    pub fn set_options(&mut self, options: Vec<R>) -> Result<(), SelectError> {
        self.update_inputs(|inputs| inputs.options = options)
    }

    /// Enable or disable the component.
    pub fn set_disabled(&mut self, disabled: bool) -> Result<(), SelectError> {
        self.update_inputs(|inputs| inputs.disabled = disabled)
    }

    fn sync_enabled(&self) {
        if self.inputs.disabled {
            self.form_control.disable();
        } else {
            self.form_control.enable();
        }
    }
}

impl<R> SelectAutocomplete<R> {
    // -------------------------------------------------------------------------
    // Check cycle
    // -------------------------------------------------------------------------

    /// Announce the empty selection.
    ///
    /// Hosts call this once per check cycle. While nothing is selected it
    /// emits the (empty) selection every time, so subscribers that react to
    /// every emission see repeated events. Returns whether it emitted.
    pub fn announce_empty_selection(&self) -> bool {
        if !self.selection.is_empty() {
            return false;
        }
        self.emit(ChangeCause::EmptySelection);
        true
    }

    // -------------------------------------------------------------------------
    // Dropdown and focus
    // -------------------------------------------------------------------------

    /// Open or close the dropdown through the overlay.
    pub fn toggle_dropdown(&self) {
        if self.is_disabled() {
            trace!("SelectAutocomplete::toggle_dropdown ignored: disabled");
            return;
        }
        match &self.overlay {
            Some(overlay) => overlay.toggle(),
            None => warn!("SelectAutocomplete::toggle_dropdown without an overlay"),
        }
    }

    /// Called when the overlay opens or closes. Focuses the search field on
    /// open.
    pub fn set_focus(&self, opened: bool) {
        if !opened {
            return;
        }
        if let Some(field) = &self.search_field {
            field.focus();
        }
    }

    /// Whether the overlay reports itself open.
    pub fn is_open(&self) -> bool {
        self.overlay.as_ref().is_some_and(|overlay| overlay.is_open())
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Filter the options by `query` (case-insensitive substring).
    pub fn filter_items(&mut self, query: &str) {
        self.store.filter(query);
        self.refresh_select_all();
    }

    /// Whether `option` is outside the filtered view.
    pub fn is_option_hidden(&self, option: &SelectOption<R>) -> bool {
        self.store.is_hidden(option.key())
    }

    /// Current search text.
    pub fn search_query(&self) -> &str {
        self.store.query()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Replace the selection with the keys the host reports as chosen.
    pub fn on_selection_committed(&mut self, values: Vec<OptionKey>) {
        self.selection.replace(values);
        if !self.inputs.config.multiple {
            self.selection.truncate_to_one();
        }
        self.refresh_select_all();
        self.commit(ChangeCause::Committed);
    }

    /// Pick or unpick the option with `key`, as a click on its row would.
    ///
    /// In single-select mode the option replaces the selection and the
    /// dropdown closes.
    pub fn toggle_option(&mut self, key: &OptionKey) {
        if self.is_disabled() {
            trace!("SelectAutocomplete::toggle_option ignored: disabled");
            return;
        }
        if self.store.find(key).is_none() {
            warn!("SelectAutocomplete::toggle_option unknown key {}", key);
            return;
        }

        if self.inputs.config.multiple {
            let mut next = self.selection.clone();
            next.toggle(key.clone());
            self.on_selection_committed(next.to_vec());
        } else {
            self.on_selection_committed(vec![key.clone()]);
            if let Some(overlay) = &self.overlay {
                overlay.close();
            }
        }
    }

    /// Select (`checked`) or deselect every option in the filtered view.
    ///
    /// Options outside the filter keep their state. Ignored in single-select
    /// mode.
    pub fn toggle_select_all(&mut self, checked: bool) {
        if !self.inputs.config.multiple {
            warn!("SelectAutocomplete::toggle_select_all ignored in single-select mode");
            return;
        }

        if checked {
            let keys: Vec<OptionKey> = self.store.filtered_keys().cloned().collect();
            self.selection.extend(keys);
        } else {
            self.selection.remove_all(self.store.filtered_keys());
        }
        self.refresh_select_all();
        self.commit(if checked {
            ChangeCause::SelectAll
        } else {
            ChangeCause::DeselectAll
        });
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.select_all_checked = false;
        self.commit(ChangeCause::Cleared);
    }

    /// Recompute the select-all flag from the filtered view.
    pub fn compute_select_all_flag(&self) -> bool {
        compute_select_all_flag(
            self.store.filtered_keys(),
            &self.selection,
            self.inputs.config.multiple,
        )
    }

    fn refresh_select_all(&mut self) {
        self.select_all_checked = self.compute_select_all_flag();
    }

    /// Write the selection to the form control and notify subscribers.
    fn commit(&self, cause: ChangeCause) {
        self.form_control.set_value(Some(self.selection.to_vec()));
        debug!(
            "SelectAutocomplete selection changed cause={:?} selected={}",
            cause,
            self.selection.len()
        );
        self.emit(cause);
    }

    fn emit(&self, cause: ChangeCause) {
        self.emitter.emit(&SelectionChange {
            values: self.selection.to_vec(),
            cause,
        });
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Register a selection-change callback.
    pub fn subscribe(
        &self,
        handler: impl Fn(&SelectionChange) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.emitter.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Summary of the selection shown in the closed field.
    pub fn display_string(&self) -> String {
        compute_display_string(
            self.store.options(),
            &self.selection,
            self.inputs.config.multiple,
            self.inputs.config.label_count,
        )
    }

    /// The display string, or the placeholder when it is empty.
    pub fn field_text(&self) -> String {
        let display = self.display_string();
        if display.is_empty() {
            self.inputs.config.placeholder.clone().unwrap_or_default()
        } else {
            display
        }
    }

    /// The caller's error message, when the caller asks for it to be shown.
    pub fn error_message(&self) -> Option<&str> {
        self.inputs
            .config
            .show_error
            .then_some(self.inputs.config.error_message.as_str())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all_checked
    }

    /// Options in display order (selected first).
    pub fn options(&self) -> &[SelectOption<R>] {
        self.store.options()
    }

    /// Options in canonical (label-sorted) order.
    pub fn canonical_options(&self) -> &[SelectOption<R>] {
        self.store.canonical()
    }

    /// The filtered view in display order.
    pub fn filtered_options(&self) -> impl Iterator<Item = &SelectOption<R>> {
        self.store.filtered()
    }

    /// Whether the bound form control is disabled.
    pub fn is_disabled(&self) -> bool {
        !self.form_control.is_enabled()
    }

    pub fn is_multiple(&self) -> bool {
        self.inputs.config.multiple
    }

    pub fn inputs(&self) -> &SelectInputs<R> {
        &self.inputs
    }

    pub fn config(&self) -> &SelectConfig {
        &self.inputs.config
    }
}
