//! UI Components
//!
//! Reusable Leptos components.

mod ordered_list_editor;
mod status_selector;
mod user_autocomplete;
mod task_card;
mod default_value_input;
mod field_card;
mod study_tasks_form;
mod assay_type_form;
mod notice_bar;

pub use study_tasks_form::StudyTasksForm;
pub use assay_type_form::AssayTypeForm;
pub use notice_bar::NoticeBar;
