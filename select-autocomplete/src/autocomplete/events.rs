//! Selection-change events.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::option::OptionKey;

/// What caused a selection-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// The host committed a new selection (a row was picked).
    Committed,
    /// The select-all checkbox was checked.
    SelectAll,
    /// The select-all checkbox was unchecked.
    DeselectAll,
    /// The selection was cleared.
    Cleared,
    /// Check-cycle announcement while nothing is selected.
    EmptySelection,
}

/// Payload of a selection-change event.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    /// The selection after the change.
    pub values: Vec<OptionKey>,
    pub cause: ChangeCause,
}

/// Selection-change callback.
pub type ChangeHandler = Arc<dyn Fn(&SelectionChange) + Send + Sync>;

/// Handle returned by [`SelectionEmitter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// Fans selection-change events out to subscribers.
///
/// Cloning shares the subscriber list.
#[derive(Clone, Default)]
pub struct SelectionEmitter {
    handlers: Arc<RwLock<Vec<(SubscriptionId, ChangeHandler)>>>,
}

impl std::fmt::Debug for SelectionEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEmitter")
            .field("subscribers", &self.len())
            .finish()
    }
}

impl SelectionEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every emitted change.
    pub fn subscribe(&self, handler: impl Fn(&SelectionChange) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.push((id, Arc::new(handler)));
        }
        id
    }

    /// Remove a callback. Returns true if it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers
            .write()
            .map(|mut handlers| {
                let before = handlers.len();
                handlers.retain(|(sub, _)| *sub != id);
                handlers.len() != before
            })
            .unwrap_or(false)
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `change` to every subscriber.
    pub fn emit(&self, change: &SelectionChange) {
        // Snapshot so handlers may subscribe/unsubscribe while running.
        let handlers: Vec<ChangeHandler> = match self.handlers.read() {
            Ok(guard) => guard.iter().map(|(_, h)| Arc::clone(h)).collect(),
            Err(_) => return,
        };
        log::trace!(
            "SelectionEmitter::emit cause={:?} values={} subscribers={}",
            change.cause,
            change.values.len(),
            handlers.len()
        );
        for handler in handlers {
            handler(change);
        }
    }
}
