//! Host collaborators: the form control, the dropdown overlay and the search
//! field.
//!
//! The component never owns these. It talks to them through the traits below
//! and the host keeps its own handle. The `*Handle` types are ready-made
//! implementations backed by shared state, so a clone held by the host sees
//! every change the component makes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::option::OptionKey;

/// A form control owned by the embedding application.
pub trait FormControl: Send + Sync {
    fn is_enabled(&self) -> bool;

    fn enable(&self);

    fn disable(&self);

    /// The current value, or `None` if the control was never given one.
    fn value(&self) -> Option<Vec<OptionKey>>;

    fn set_value(&self, value: Option<Vec<OptionKey>>);
}

/// The dropdown overlay. It owns the open/closed state.
pub trait Overlay: Send + Sync {
    fn is_open(&self) -> bool;

    fn open(&self);

    fn close(&self);

    /// Toggle the overlay open/closed.
    fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}

/// The search box rendered inside the dropdown.
pub trait SearchField: Send + Sync {
    fn focus(&self);
}

// -----------------------------------------------------------------------------
// Form control
// -----------------------------------------------------------------------------

#[derive(Debug)]
struct FormControlInner {
    enabled: bool,
    value: Option<Vec<OptionKey>>,
}

impl Default for FormControlInner {
    fn default() -> Self {
        Self {
            enabled: true,
            value: None,
        }
    }
}

/// A shared, in-memory form control.
///
/// Starts enabled and without a value.
#[derive(Debug, Clone, Default)]
pub struct FormControlHandle {
    inner: Arc<RwLock<FormControlInner>>,
}

impl FormControlHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a control holding `value`.
    pub fn with_value(value: Vec<OptionKey>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(FormControlInner {
                enabled: true,
                value: Some(value),
            })),
        }
    }
}

impl FormControl for FormControlHandle {
    fn is_enabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.enabled)
            .unwrap_or(false)
    }

    fn enable(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.enabled = true;
        }
    }

    fn disable(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.enabled = false;
        }
    }

    fn value(&self) -> Option<Vec<OptionKey>> {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or(None)
    }

    fn set_value(&self, value: Option<Vec<OptionKey>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
        }
    }
}

// -----------------------------------------------------------------------------
// Overlay
// -----------------------------------------------------------------------------

/// A shared open/closed flag standing in for an overlay widget.
#[derive(Debug, Clone, Default)]
pub struct OverlayHandle {
    is_open: Arc<AtomicBool>,
}

impl OverlayHandle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Overlay for OverlayHandle {
    fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    fn open(&self) {
        self.is_open.store(true, Ordering::SeqCst);
    }

    fn close(&self) {
        self.is_open.store(false, Ordering::SeqCst);
    }
}

// -----------------------------------------------------------------------------
// Search field
// -----------------------------------------------------------------------------

/// A search field that records focus requests for the host runtime.
#[derive(Debug, Clone, Default)]
pub struct SearchFieldHandle {
    focus_requested: Arc<AtomicBool>,
}

impl SearchFieldHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether focus was requested and not yet taken.
    pub fn focus_requested(&self) -> bool {
        self.focus_requested.load(Ordering::SeqCst)
    }

    /// Take the pending focus request, clearing it.
    pub fn take_focus_request(&self) -> bool {
        self.focus_requested.swap(false, Ordering::SeqCst)
    }
}

impl SearchField for SearchFieldHandle {
    fn focus(&self) {
        self.focus_requested.store(true, Ordering::SeqCst);
    }
}
