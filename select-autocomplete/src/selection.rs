//! Selection bookkeeping.

use crate::option::{OptionKey, SelectOption, same_key};

/// The selected option keys.
///
/// Stored in insertion order but treated as a set: inserting a key that is
/// already present is a no-op. Keys are compared with [`same_key`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    keys: Vec<OptionKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from keys, dropping duplicates.
    pub fn from_keys(keys: impl IntoIterator<Item = OptionKey>) -> Self {
        let mut selection = Self::new();
        selection.extend(keys);
        selection
    }

    /// Insert a key. Returns true if it was not selected yet.
    pub fn insert(&mut self, key: OptionKey) -> bool {
        if self.contains(&key) {
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    /// Insert keys in order, skipping ones already present.
    pub fn extend(&mut self, keys: impl IntoIterator<Item = OptionKey>) {
        for key in keys {
            self.insert(key);
        }
    }

    /// Remove a key. Returns true if it was selected.
    pub fn remove(&mut self, key: &OptionKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| !same_key(k, key));
        self.keys.len() != before
    }

    /// Remove every key in `keys`.
    pub fn remove_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a OptionKey>) {
        let keys: Vec<&OptionKey> = keys.into_iter().collect();
        self.keys.retain(|k| !keys.iter().any(|other| same_key(k, other)));
    }

    /// Toggle a key. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, key: OptionKey) -> bool {
        if self.remove(&key) {
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    /// Replace the whole selection, dropping duplicates.
    pub fn replace(&mut self, keys: impl IntoIterator<Item = OptionKey>) {
        self.keys.clear();
        self.extend(keys);
    }

    /// Keep only the first key.
    pub fn truncate_to_one(&mut self) {
        self.keys.truncate(1);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &OptionKey) -> bool {
        self.keys.iter().any(|k| same_key(k, key))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// The first selected key (the single-select value).
    pub fn first(&self) -> Option<&OptionKey> {
        self.keys.first()
    }

    pub fn keys(&self) -> &[OptionKey] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionKey> {
        self.keys.iter()
    }

    pub fn to_vec(&self) -> Vec<OptionKey> {
        self.keys.clone()
    }
}

/// Whether every visible key is selected.
///
/// False in single-select mode and when nothing is visible.
pub fn compute_select_all_flag<'a>(
    visible: impl IntoIterator<Item = &'a OptionKey>,
    selection: &Selection,
    multiple: bool,
) -> bool {
    if !multiple {
        return false;
    }
    let mut any = false;
    for key in visible {
        if !selection.contains(key) {
            return false;
        }
        any = true;
    }
    any
}

/// Selected options first, then the rest, each keeping canonical order.
///
/// With an empty selection the canonical order is returned unchanged.
pub fn reorder_by_selection<R: Clone>(
    canonical: &[SelectOption<R>],
    selection: &Selection,
) -> Vec<SelectOption<R>> {
    if selection.is_empty() {
        return canonical.to_vec();
    }
    let (mut selected, unselected): (Vec<_>, Vec<_>) = canonical
        .iter()
        .cloned()
        .partition(|option| selection.contains(option.key()));
    selected.extend(unselected);
    selected
}

/// Text summarizing the selection.
///
/// In multi-select mode at most `label_count` labels are joined with `,`
/// in the order of `options`, followed by `(+K) others` when `K` more are
/// selected. In single-select mode it is the label of the selected option.
/// Empty when nothing (known) is selected.
pub fn compute_display_string<R>(
    options: &[SelectOption<R>],
    selection: &Selection,
    multiple: bool,
    label_count: usize,
) -> String {
    if selection.is_empty() {
        return String::new();
    }

    if !multiple {
        return selection
            .first()
            .and_then(|key| options.iter().find(|option| same_key(option.key(), key)))
            .map(|option| option.label().to_string())
            .unwrap_or_default();
    }

    let labels: Vec<&str> = options
        .iter()
        .filter(|option| selection.contains(option.key()))
        .map(SelectOption::label)
        .collect();
    let shown = labels.len().min(label_count);
    let mut display = labels[..shown].join(",");
    let rest = labels.len() - shown;
    if rest > 0 {
        display.push_str(&format!("(+{}) others", rest));
    }
    display
}
