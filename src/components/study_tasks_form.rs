//! Study Tasks Form Component
//!
//! Owns a study draft and its task list. Validates and submits the whole
//! list on save; cancel drops every local edit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::ordered_list_editor::OrderedListEditor;
use crate::components::task_card::task_card;
use crate::context::AppContext;
use crate::models::Task;
use crate::store::{StudyDraft, StudyDraftStoreFields};
use crate::validation::validate_study;

#[component]
pub fn StudyTasksForm(
    /// Study being edited; a blank study when absent
    initial: Option<StudyDraft>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let initial = StoredValue::new(initial.unwrap_or_default().normalized());
    let store = Store::new(initial.get_value());
    let (submitting, set_submitting) = signal(false);

    let tasks = Signal::derive(move || store.tasks().get());
    let on_tasks_change = Callback::new(move |tasks: Vec<Task>| {
        *store.tasks().write() = tasks;
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store.get_untracked();
        if let Err(err) = validate_study(&draft.name, &draft.tasks) {
            log::debug!("[STUDY] Validation failed: {}", err);
            ctx.notify_error(err.to_string());
            return;
        }

        set_submitting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match api::save_study(&config, &draft).await {
                Ok(()) => {
                    ctx.notify_success(format!("Saved \"{}\" with {} task(s)", draft.name, draft.tasks.len()));
                    // The saved state becomes the new cancel point
                    initial.try_set_value(draft);
                }
                Err(err) => {
                    log::error!("[STUDY] Save failed: {}", err);
                    ctx.notify_error(format!("Could not save study: {}", err));
                }
            }
            set_submitting.try_set(false);
        });
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        log::debug!("[STUDY] Discarding local edits");
        *store.write() = initial.get_value();
    };

    view! {
        <form class="entity-form study-form" on:submit=on_submit>
            <h2>"Study tasks"</h2>

            <div class="editor-section">
                <label class="editor-label">"Study name"</label>
                <input
                    type="text"
                    class="name-edit-input"
                    prop:value=move || store.name().get()
                    on:input=move |ev| {
                        *store.name().write() = event_target_value(&ev);
                    }
                />
            </div>

            <div class="editor-section">
                <label class="editor-label">"Tasks"</label>
                <OrderedListEditor
                    items=tasks
                    on_change=on_tasks_change
                    card=Callback::new(task_card)
                    add_label="+ Add task"
                    empty_text="No tasks yet"
                />
            </div>

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=on_cancel>"Cancel"</button>
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
