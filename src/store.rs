//! Form Draft Stores
//!
//! Each host form keeps its draft in a `reactive_stores::Store` so the name
//! input and the list editor only re-render for the field they read.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::models::{CustomField, Task};
use crate::ordered::normalize;

/// Study being edited: its name and task list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Store)]
#[serde(rename_all = "camelCase")]
pub struct StudyDraft {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl StudyDraft {
    /// Collapse whatever `order` values came in into 0..N-1
    pub fn normalized(mut self) -> Self {
        self.tasks = normalize(&self.tasks);
        self
    }
}

/// Assay type being edited: its name and custom field definitions
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Store)]
#[serde(rename_all = "camelCase")]
pub struct AssayTypeDraft {
    pub name: String,
    pub fields: Vec<CustomField>,
}

impl AssayTypeDraft {
    /// Renumber the fields and drop values their types cannot carry
    pub fn normalized(mut self) -> Self {
        self.fields = normalize(&self.fields);
        self.fields.iter_mut().for_each(CustomField::settle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordered::OrderedItem;

    #[test]
    fn test_normalized_draft_renumbers_tasks() {
        let mut late = Task::blank(7);
        late.label = "late".to_string();
        let mut early = Task::blank(2);
        early.label = "early".to_string();
        let draft = StudyDraft { name: "S".to_string(), tasks: vec![late, early] }.normalized();
        let labels: Vec<(&str, usize)> = draft.tasks.iter().map(|t| (t.label.as_str(), t.order)).collect();
        assert_eq!(labels, vec![("early", 0), ("late", 1)]);
    }

    #[test]
    fn test_study_body_shape() {
        let draft = StudyDraft { name: "S".to_string(), tasks: vec![Task::blank(0)] };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["name"], "S");
        assert_eq!(value["tasks"][0]["status"], "TODO");
    }

    #[test]
    fn test_loaded_assay_type_drops_stale_field_values() {
        let draft: AssayTypeDraft = serde_json::from_value(serde_json::json!({
            "name": "Imaging",
            "fields": [
                { "displayName": "Note", "fieldName": "Note", "type": "STRING", "dropdownOptions": "x\ny", "order": 0 },
                { "displayName": "Color", "fieldName": "Color", "type": "DROPDOWN",
                  "dropdownOptions": "Green\nBlue", "defaultValue": "Red", "order": 1 },
            ],
        }))
        .unwrap();
        let draft = draft.normalized();
        assert_eq!(draft.fields[0].dropdown_options, None);
        assert_eq!(draft.fields[1].dropdown_options.as_deref(), Some("Green\nBlue"));
        assert_eq!(draft.fields[1].default_value, None);
    }
}
