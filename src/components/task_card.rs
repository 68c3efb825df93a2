//! Task Card Component
//!
//! Editable body of one task in the study task list.

use leptos::prelude::*;

use crate::components::ordered_list_editor::CardArgs;
use crate::components::status_selector::StatusSelector;
use crate::components::user_autocomplete::UserAutocomplete;
use crate::models::{format_due_date, parse_due_date, Task, TaskPatch, TaskStatus, UserRef};

/// Card renderer for the task list editor
pub fn task_card(args: CardArgs<Task>) -> AnyView {
    view! { <TaskCard item=args.item on_patch=args.on_patch /> }.into_any()
}

#[component]
pub fn TaskCard(item: Signal<Task>, on_patch: Callback<TaskPatch>) -> impl IntoView {
    let status = Signal::derive(move || item.with(|t| t.status));
    let assigned_to = Signal::derive(move || item.with(|t| t.assigned_to.clone()));

    view! {
        <div class="task-card">
            <input
                type="text"
                class="task-label-input"
                placeholder="Describe the task..."
                prop:value=move || item.with(|t| t.label.clone())
                on:input=move |ev| on_patch.run(TaskPatch::label(event_target_value(&ev)))
            />

            <StatusSelector
                current=status
                on_change={move |status: TaskStatus| on_patch.run(TaskPatch::status(status))}
            />

            // Cleared or unparsable input clears the date
            <div class="task-card-row">
                <label class="editor-label">"Due"</label>
                <input
                    type="date"
                    class="task-due-input"
                    prop:value=move || item.with(|t| t.due_date.as_ref().map(format_due_date).unwrap_or_default())
                    on:change=move |ev| on_patch.run(TaskPatch::due_date(parse_due_date(&event_target_value(&ev))))
                />
            </div>

            <div class="task-card-row">
                <label class="editor-label">"Assigned to"</label>
                <UserAutocomplete
                    selected=assigned_to
                    on_select={move |user: Option<UserRef>| on_patch.run(TaskPatch::assigned_to(user))}
                />
            </div>
        </div>
    }
}
