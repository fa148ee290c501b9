pub mod autocomplete;
pub mod config;
pub mod error;
pub mod host;
pub mod option;
pub mod selection;

pub use autocomplete::{SelectAutocomplete, SelectInputs};
pub use error::{FieldError, SelectError};

pub mod prelude {
    pub use crate::autocomplete::{
        ChangeCause, DropdownView, SelectAutocomplete, SelectInputs, SelectionChange,
        SubscriptionId,
    };
    pub use crate::config::{Appearance, ElementSelectors, SelectConfig};
    pub use crate::error::{FieldError, SelectError};
    pub use crate::host::{
        FormControl, FormControlHandle, Overlay, OverlayHandle, SearchField, SearchFieldHandle,
    };
    pub use crate::option::{FieldNames, OptionKey, OptionRecord, SelectOption};
    pub use crate::selection::Selection;
}
