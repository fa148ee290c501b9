//! Option records and field resolution.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::error::FieldError;

/// Identity key of an option.
pub type OptionKey = Value;

/// A record that can be shown as an option.
///
/// Field names are configured at runtime, so records are looked up by name
/// rather than through fixed accessors.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl OptionRecord for Country {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "code" => Some(Value::from(self.code.as_str())),
///             "name" => Some(Value::from(self.name.as_str())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait OptionRecord {
    /// Value of the named field, if the record has it.
    fn field(&self, name: &str) -> Option<Value>;
}

impl OptionRecord for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl OptionRecord for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher> OptionRecord for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl OptionRecord for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Whether two option keys identify the same option.
///
/// Numbers compare by numeric value, so `1` and `1.0` are the same key.
/// Everything else uses plain equality.
pub fn same_key(a: &OptionKey, b: &OptionKey) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// Names of the display and value fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    display: String,
    value: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::new("display", "value")
    }
}

impl FieldNames {
    pub fn new(display: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: value.into(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A record with its label and key resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<R> {
    record: R,
    label: String,
    key: OptionKey,
}

impl<R: OptionRecord> SelectOption<R> {
    /// Resolve the configured fields of `record`.
    ///
    /// `index` is the record's position in the input list and only feeds
    /// error messages.
    pub fn resolve(record: R, fields: &FieldNames, index: usize) -> Result<Self, FieldError> {
        let display = record
            .field(fields.display())
            .ok_or_else(|| FieldError::missing(fields.display(), index))?;
        let label = display_text(display, fields.display(), index)?;
        let key = record
            .field(fields.value())
            .ok_or_else(|| FieldError::missing(fields.value(), index))?;

        Ok(Self { record, label, key })
    }
}

impl<R> SelectOption<R> {
    /// The underlying record.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Text shown for this option.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Identity key of this option.
    pub fn key(&self) -> &OptionKey {
        &self.key
    }
}

/// Resolve every record, failing on the first malformed one.
pub fn resolve_options<R: OptionRecord>(
    records: impl IntoIterator<Item = R>,
    fields: &FieldNames,
) -> Result<Vec<SelectOption<R>>, FieldError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| SelectOption::resolve(record, fields, index))
        .collect()
}

fn display_text(value: Value, field: &str, index: usize) -> Result<String, FieldError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(FieldError::not_text(field, index, "null")),
        Value::Array(_) => Err(FieldError::not_text(field, index, "array")),
        Value::Object(_) => Err(FieldError::not_text(field, index, "object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_text_converts_scalars() {
        assert_eq!(display_text(json!("a"), "d", 0).unwrap(), "a");
        assert_eq!(display_text(json!(42), "d", 0).unwrap(), "42");
        assert_eq!(display_text(json!(true), "d", 0).unwrap(), "true");
    }

    #[test]
    fn test_same_key_compares_numbers_by_value() {
        assert!(same_key(&json!(1), &json!(1.0)));
        assert!(same_key(&json!(-3), &json!(-3.0)));
        assert!(!same_key(&json!(1), &json!(1.5)));
        assert!(!same_key(&json!(1), &json!("1")));
        assert!(same_key(&json!("a"), &json!("a")));
    }

    #[test]
    fn test_display_text_rejects_structures() {
        assert_eq!(
            display_text(json!(null), "d", 3),
            Err(FieldError::not_text("d", 3, "null"))
        );
        assert!(display_text(json!([1]), "d", 0).is_err());
        assert!(display_text(json!({"a": 1}), "d", 0).is_err());
    }
}
