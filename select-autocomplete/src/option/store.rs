//! Option store: canonical order, display order and the filtered view.

use log::trace;

use crate::selection::{Selection, reorder_by_selection};

use super::{OptionKey, SelectOption, same_key};

/// Sort options by label, ignoring case.
///
/// Labels are compared after uppercasing. Equal labels keep their relative
/// order.
pub fn apply_sort<R>(options: &mut [SelectOption<R>]) {
    options.sort_by_cached_key(|option| option.label().to_uppercase());
}

/// Indices of the options whose label contains `query`, ignoring case.
///
/// An empty query matches everything.
pub fn filter_indices<R>(options: &[SelectOption<R>], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.label().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// The options whose label contains `query`, ignoring case.
pub fn apply_filter<'a, R>(options: &'a [SelectOption<R>], query: &str) -> Vec<&'a SelectOption<R>> {
    filter_indices(options, query)
        .into_iter()
        .map(|index| &options[index])
        .collect()
}

/// Holds the option list in its canonical and display orders, plus the
/// search-filtered view over the display order.
#[derive(Debug, Clone)]
pub struct OptionStore<R> {
    /// Label-sorted order, rebuilt on every load.
    canonical: Vec<SelectOption<R>>,
    /// Order shown to the user (selected first).
    options: Vec<SelectOption<R>>,
    /// Indices into `options` matching `query`.
    filtered: Vec<usize>,
    query: String,
}

impl<R> Default for OptionStore<R> {
    fn default() -> Self {
        Self {
            canonical: Vec::new(),
            options: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
        }
    }
}

impl<R: Clone> OptionStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the option list. The sorted list becomes the canonical order.
    pub fn load(&mut self, mut options: Vec<SelectOption<R>>) {
        apply_sort(&mut options);
        self.options = options.clone();
        self.canonical = options;
        self.refilter();
    }

    /// Rebuild the display order with selected options first.
    pub fn rearrange(&mut self, selection: &Selection) {
        self.options = reorder_by_selection(&self.canonical, selection);
        self.refilter();
    }
}

impl<R> OptionStore<R> {
    /// Set the search text and recompute the filtered view.
    pub fn filter(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.options, &self.query);
        trace!(
            "OptionStore::refilter query={:?} matched={}/{}",
            self.query,
            self.filtered.len(),
            self.options.len()
        );
    }

    /// Options in canonical (label-sorted) order.
    pub fn canonical(&self) -> &[SelectOption<R>] {
        &self.canonical
    }

    /// Options in display order.
    pub fn options(&self) -> &[SelectOption<R>] {
        &self.options
    }

    /// The filtered view, in display order.
    pub fn filtered(&self) -> impl Iterator<Item = &SelectOption<R>> {
        self.filtered.iter().map(|&index| &self.options[index])
    }

    /// Keys of the filtered view, in display order.
    pub fn filtered_keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.filtered().map(SelectOption::key)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether the option with `key` is outside the filtered view.
    pub fn is_hidden(&self, key: &OptionKey) -> bool {
        !self.filtered_keys().any(|k| same_key(k, key))
    }

    /// Find an option by key in display order.
    pub fn find(&self, key: &OptionKey) -> Option<&SelectOption<R>> {
        self.options.iter().find(|option| same_key(option.key(), key))
    }
}
