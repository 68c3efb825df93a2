//! Submit-time Validation
//!
//! Host forms scan their whole collection before submitting; the first
//! failing card is reported.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ValidationError;
use crate::models::{CustomField, FieldType, Task};

fn require_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

/// Every task needs a non-blank label
pub fn validate_tasks(tasks: &[Task]) -> Result<(), ValidationError> {
    match tasks.iter().position(|task| !task.has_label()) {
        Some(index) => Err(ValidationError::EmptyTaskLabel { position: index + 1 }),
        None => Ok(()),
    }
}

/// Display names present, field names unique, dropdowns with options
/// and a default drawn from them
pub fn validate_fields(fields: &[CustomField]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for (index, field) in fields.iter().enumerate() {
        let position = index + 1;
        if field.display_name.trim().is_empty() {
            return Err(ValidationError::EmptyFieldName { position });
        }
        if !seen.insert(field.field_name.as_str()) {
            return Err(ValidationError::DuplicateFieldName(field.field_name.clone()));
        }
        if field.field_type == FieldType::Dropdown {
            let options = field.options();
            if options.is_empty() {
                return Err(ValidationError::MissingDropdownOptions { position });
            }
            let known = match &field.default_value {
                None => true,
                Some(Value::String(choice)) => options.contains(choice),
                Some(_) => false,
            };
            if !known {
                return Err(ValidationError::UnknownDropdownDefault { position });
            }
        }
    }
    Ok(())
}

pub fn validate_study(name: &str, tasks: &[Task]) -> Result<(), ValidationError> {
    require_name(name)?;
    validate_tasks(tasks)
}

pub fn validate_assay_type(name: &str, fields: &[CustomField]) -> Result<(), ValidationError> {
    require_name(name)?;
    validate_fields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldPatch;
    use crate::ordered::OrderedItem;
    use serde_json::json;

    fn task(label: &str) -> Task {
        let mut task = Task::blank(0);
        task.label = label.to_string();
        task
    }

    fn field(display_name: &str) -> CustomField {
        let mut field = CustomField::blank(0);
        field.apply(FieldPatch::display_name(display_name));
        field
    }

    #[test]
    fn test_tasks_valid() {
        assert_eq!(validate_tasks(&[]), Ok(()));
        assert_eq!(validate_tasks(&[task("A"), task("B")]), Ok(()));
    }

    #[test]
    fn test_first_blank_task_reported() {
        let tasks = [task("A"), task("  "), task("")];
        assert_eq!(validate_tasks(&tasks), Err(ValidationError::EmptyTaskLabel { position: 2 }));
    }

    #[test]
    fn test_study_name_checked_first() {
        assert_eq!(validate_study(" ", &[task("")]), Err(ValidationError::MissingName));
        assert_eq!(validate_study("Tox study", &[task("A")]), Ok(()));
    }

    #[test]
    fn test_blank_display_name() {
        let fields = [field("Dose"), field("")];
        assert_eq!(validate_fields(&fields), Err(ValidationError::EmptyFieldName { position: 2 }));
    }

    #[test]
    fn test_duplicate_derived_names() {
        // Both derive to "Dose_mg"
        let fields = [field("Dose mg"), field("Dose-mg")];
        assert_eq!(
            validate_fields(&fields),
            Err(ValidationError::DuplicateFieldName("Dose_mg".to_string()))
        );
    }

    #[test]
    fn test_dropdown_needs_options() {
        let mut color = field("Color");
        color.apply(FieldPatch::field_type(FieldType::Dropdown));
        assert_eq!(
            validate_assay_type("Imaging", &[color.clone()]),
            Err(ValidationError::MissingDropdownOptions { position: 1 })
        );
        color.apply(FieldPatch::dropdown_options("Red\nGreen"));
        assert_eq!(validate_assay_type("Imaging", &[color]), Ok(()));
    }

    #[test]
    fn test_dropdown_default_must_be_an_option() {
        // A loaded draft can carry a default its options no longer list
        let mut color = field("Color");
        color.field_type = FieldType::Dropdown;
        color.dropdown_options = Some("Green\nBlue".to_string());
        color.default_value = Some(json!("Red"));
        assert_eq!(
            validate_fields(&[field("Dose"), color.clone()]),
            Err(ValidationError::UnknownDropdownDefault { position: 2 })
        );

        color.default_value = Some(json!("Blue"));
        assert_eq!(validate_fields(&[color]), Ok(()));
    }
}
