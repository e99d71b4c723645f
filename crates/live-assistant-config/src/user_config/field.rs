//! Checked, per-key extraction of typed values from an untyped mapping.

use serde_json::{Map, Value};
use tracing::debug;

/// A value that can be read out of a JSON field without coercion.
pub(crate) trait FieldValue: Sized {
    /// JSON kind this type expects, used in diagnostics.
    const EXPECTED: &'static str;

    /// Returns `None` when `value` is not of the expected JSON kind.
    fn from_value(value: &Value) -> Option<Self>;

    /// Converts back into a JSON value.
    fn to_value(&self) -> Value;
}

impl FieldValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "integer";

    // `as_i64` rejects floats such as 5.0, so integer fields never truncate.
    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl FieldValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn to_value(&self) -> Value {
        // Non-finite numbers have no JSON form and become null.
        Value::from(*self)
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

/// Reads `key` from `mapping`.
///
/// Missing keys, `null` and values of the wrong JSON kind all yield `None`.
/// Construction never fails because of a single field.
pub(crate) fn read_field<T: FieldValue>(mapping: &Map<String, Value>, key: &str) -> Option<T> {
    match mapping.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let field = T::from_value(value);
            if field.is_none() {
                debug!(
                    field = key,
                    expected = T::EXPECTED,
                    found = value_kind(value),
                    "Field has unexpected type, leaving unset"
                );
            }
            field
        }
    }
}

/// Inserts `field` under `key` when it is set.
pub(crate) fn write_field<T: FieldValue>(
    mapping: &mut Map<String, Value>,
    key: &str,
    field: &Option<T>,
) {
    if let Some(value) = field {
        mapping.insert(key.to_owned(), value.to_value());
    }
}

/// Name of the JSON kind of `value`.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
