//! Custom Field Helpers
//!
//! Field name derivation, dropdown option parsing, and the mapping from a
//! field's type to the control that captures its default value.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

use crate::models::{CustomField, FieldType};

/// Anything outside `[A-Za-z0-9_]`
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("valid regex"));

/// Machine name for a display name: every non-word character becomes `_`
pub fn derive_field_name(display_name: &str) -> String {
    NON_WORD.replace_all(display_name, "_").into_owned()
}

/// Options of a dropdown field, one per non-blank line
pub fn dropdown_options(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Control used to capture a field's default value
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValueControl {
    TextInput,
    TextArea,
    IntegerInput,
    FloatInput,
    BooleanSelect,
    DatePicker,
    DropdownSelect(Vec<String>),
    /// FILE fields carry no default
    Unsupported,
}

impl DefaultValueControl {
    pub fn for_field(field: &CustomField) -> Self {
        match field.field_type {
            FieldType::String => DefaultValueControl::TextInput,
            FieldType::Text => DefaultValueControl::TextArea,
            FieldType::Integer => DefaultValueControl::IntegerInput,
            FieldType::Float => DefaultValueControl::FloatInput,
            FieldType::Boolean => DefaultValueControl::BooleanSelect,
            FieldType::Date => DefaultValueControl::DatePicker,
            FieldType::Dropdown => DefaultValueControl::DropdownSelect(field.options()),
            FieldType::File => DefaultValueControl::Unsupported,
        }
    }
}

/// Convert raw control input into the JSON value stored for `field_type`.
/// Empty or unparsable input clears the default.
pub fn parse_default_value(field_type: FieldType, raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match field_type {
        FieldType::Integer => raw.parse::<i64>().ok().map(Value::from),
        FieldType::Float => raw.parse::<f64>().ok().and_then(Number::from_f64).map(Value::Number),
        FieldType::Boolean => match raw {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        FieldType::File => None,
        FieldType::String | FieldType::Text | FieldType::Date | FieldType::Dropdown => {
            Some(Value::String(raw.to_string()))
        }
    }
}

/// Text shown in a control for a stored default
pub fn default_value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
