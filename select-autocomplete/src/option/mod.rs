//! Option records and the option store.

mod record;
mod store;

pub use record::{FieldNames, OptionKey, OptionRecord, SelectOption, resolve_options, same_key};
pub use store::{OptionStore, apply_filter, apply_sort, filter_indices};
