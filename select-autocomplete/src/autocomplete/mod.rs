//! Select-autocomplete component - a searchable single/multi-select dropdown.

pub mod events;
pub mod render;
mod state;

pub use events::{ChangeCause, ChangeHandler, SelectionChange, SelectionEmitter, SubscriptionId};
pub use render::{DropdownView, FieldView, PanelView, RowView, SearchView};
pub use state::{SelectAutocomplete, SelectInputs};
