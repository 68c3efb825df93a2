//! Frontend Models
//!
//! Data structures exchanged with the backend, plus the typed patches the
//! list editors apply to them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fields::{derive_field_name, dropdown_options};
use crate::ordered::OrderedItem;

// ========================
// Users
// ========================

/// User record as returned by the user search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: u64,
    pub display_name: String,
    #[serde(default)]
    pub email: String,
}

impl UserRef {
    /// "Name <email>" or just the name when no email is known
    pub fn label(&self) -> String {
        if self.email.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} <{}>", self.display_name, self.email)
        }
    }
}

// ========================
// Tasks
// ========================

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Complete,
    Incomplete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Complete,
        TaskStatus::Incomplete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Complete => "Complete",
            TaskStatus::Incomplete => "Incomplete",
        }
    }
}

/// A study task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub label: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to: Option<UserRef>,
    #[serde(default)]
    pub order: usize,
}

impl Task {
    /// A task counts as filled in once its label has visible text
    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

/// Partial update for a task; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub label: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub assigned_to: Option<Option<UserRef>>,
}

impl TaskPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Default::default() }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self { status: Some(status), ..Default::default() }
    }

    pub fn due_date(due_date: Option<DateTime<Utc>>) -> Self {
        Self { due_date: Some(due_date), ..Default::default() }
    }

    pub fn assigned_to(user: Option<UserRef>) -> Self {
        Self { assigned_to: Some(user), ..Default::default() }
    }
}

impl OrderedItem for Task {
    type Patch = TaskPatch;

    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    fn blank(order: usize) -> Self {
        Self {
            label: String::new(),
            status: TaskStatus::default(),
            due_date: None,
            assigned_to: None,
            order,
        }
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(user) = patch.assigned_to {
            self.assigned_to = user;
        }
    }
}

/// Parse the `YYYY-MM-DD` value of a date input into midnight UTC
pub fn parse_due_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Format a due date for a date input
pub fn format_due_date(due_date: &DateTime<Utc>) -> String {
    due_date.format("%Y-%m-%d").to_string()
}

// ========================
// Custom fields
// ========================

/// Custom field value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    #[default]
    String,
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    Dropdown,
    File,
}

impl FieldType {
    pub const ALL: [FieldType; 8] = [
        FieldType::String,
        FieldType::Text,
        FieldType::Integer,
        FieldType::Float,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::Dropdown,
        FieldType::File,
    ];

    /// Wire name, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Text => "TEXT",
            FieldType::Integer => "INTEGER",
            FieldType::Float => "FLOAT",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Date => "DATE",
            FieldType::Dropdown => "DROPDOWN",
            FieldType::File => "FILE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Text => "Text",
            FieldType::Integer => "Integer",
            FieldType::Float => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::Date => "Date",
            FieldType::Dropdown => "Dropdown",
            FieldType::File => "File",
        }
    }
}

/// A custom field definition attached to an assay type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub display_name: String,
    pub field_name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub dropdown_options: Option<String>,
    #[serde(default)]
    pub order: usize,
}

/// Partial update for a custom field; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub display_name: Option<String>,
    pub field_name: Option<String>,
    pub field_type: Option<FieldType>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub default_value: Option<Option<Value>>,
    pub dropdown_options: Option<Option<String>>,
}

impl FieldPatch {
    /// Rename the field; the machine name follows the display name
    pub fn display_name(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            field_name: Some(derive_field_name(&display_name)),
            display_name: Some(display_name),
            ..Default::default()
        }
    }

    /// Change the type; a default captured for the old type is dropped.
    /// Leaving DROPDOWN also drops its options.
    pub fn field_type(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            default_value: Some(None),
            ..Default::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self { description: Some(description.into()), ..Default::default() }
    }

    pub fn required(required: bool) -> Self {
        Self { required: Some(required), ..Default::default() }
    }

    pub fn default_value(value: Option<Value>) -> Self {
        Self { default_value: Some(value), ..Default::default() }
    }

    pub fn dropdown_options(options: impl Into<String>) -> Self {
        let options = options.into();
        Self {
            dropdown_options: Some(if options.is_empty() { None } else { Some(options) }),
            ..Default::default()
        }
    }
}

impl CustomField {
    /// Parsed options of a dropdown field
    pub fn options(&self) -> Vec<String> {
        dropdown_options(self.dropdown_options.as_deref().unwrap_or(""))
    }

    /// Drop values the current type cannot carry: options outside DROPDOWN,
    /// and a dropdown default that is no longer one of the options
    pub fn settle(&mut self) {
        if self.field_type != FieldType::Dropdown {
            self.dropdown_options = None;
            return;
        }
        let stale = match &self.default_value {
            None => false,
            Some(Value::String(choice)) => !self.options().contains(choice),
            Some(_) => true,
        };
        if stale {
            self.default_value = None;
        }
    }
}

impl OrderedItem for CustomField {
    type Patch = FieldPatch;

    fn order(&self) -> usize {
        self.order
    }

    fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    fn blank(order: usize) -> Self {
        Self {
            display_name: String::new(),
            field_name: String::new(),
            field_type: FieldType::default(),
            description: String::new(),
            required: false,
            default_value: None,
            dropdown_options: None,
            order,
        }
    }

    fn apply(&mut self, patch: FieldPatch) {
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(field_name) = patch.field_name {
            self.field_name = field_name;
        }
        if let Some(field_type) = patch.field_type {
            self.field_type = field_type;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(default_value) = patch.default_value {
            self.default_value = default_value;
        }
        if let Some(options) = patch.dropdown_options {
            self.dropdown_options = options;
        }
        self.settle();
    }
}
