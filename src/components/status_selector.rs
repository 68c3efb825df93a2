//! Status Selector Component
//!
//! Button group for picking a task status.

use leptos::prelude::*;

use crate::models::TaskStatus;

/// Status buttons for a task
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<TaskStatus>,
    #[prop(into)] on_change: Callback<TaskStatus>,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {TaskStatus::ALL.iter().map(|status| {
                let status = *status;
                let is_selected = move || current.get() == status;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change.run(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
