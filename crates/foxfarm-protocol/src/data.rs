//! Typed access over decoded scenario results.

use serde_json::Value;

use crate::error::AccessError;

/// The ordered result values of one scenario execution.
///
/// Indices are aligned with the value-bearing commands of the submitted
/// scenario, in issue order; pure side-effect commands (navigate, click,
/// fill, ...) contribute no entry. Conversions are a closed set of
/// explicit methods; a mismatch or an out-of-range index fails loudly
/// instead of producing a default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioData {
    values: Vec<Value>,
}

impl ScenarioData {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Bounds-checked access to the raw JSON value at `index`.
    pub fn raw(&self, index: usize) -> Result<&Value, AccessError> {
        self.values.get(index).ok_or(AccessError::OutOfRange {
            index,
            len: self.values.len(),
        })
    }

    pub fn bool_at(&self, index: usize) -> Result<bool, AccessError> {
        let value = self.raw(index)?;
        value
            .as_bool()
            .ok_or_else(|| mismatch(index, "a boolean", value))
    }

    pub fn string_at(&self, index: usize) -> Result<String, AccessError> {
        let value = self.raw(index)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch(index, "a string", value))
    }

    pub fn int_at(&self, index: usize) -> Result<i64, AccessError> {
        let value = self.raw(index)?;
        value
            .as_i64()
            .ok_or_else(|| mismatch(index, "an integer", value))
    }

    /// Numeric read that accepts any JSON number.
    pub fn float_at(&self, index: usize) -> Result<f64, AccessError> {
        let value = self.raw(index)?;
        value
            .as_f64()
            .ok_or_else(|| mismatch(index, "a number", value))
    }

    /// Structural conversion of an array value into an owned string
    /// sequence, preserving element order.
    pub fn strings_at(&self, index: usize) -> Result<Vec<String>, AccessError> {
        let array = self.array_at(index, "an array of strings")?;
        array
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| mismatch(index, "an array of strings", item))
            })
            .collect()
    }

    pub fn ints_at(&self, index: usize) -> Result<Vec<i64>, AccessError> {
        let array = self.array_at(index, "an array of integers")?;
        array
            .iter()
            .map(|item| {
                item.as_i64()
                    .ok_or_else(|| mismatch(index, "an array of integers", item))
            })
            .collect()
    }

    fn array_at(&self, index: usize, expected: &'static str) -> Result<&[Value], AccessError> {
        let value = self.raw(index)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| mismatch(index, expected, value))
    }
}

fn mismatch(index: usize, expected: &'static str, found: &Value) -> AccessError {
    AccessError::TypeMismatch {
        index,
        expected,
        found: kind_of(found),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
