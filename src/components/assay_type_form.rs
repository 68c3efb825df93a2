//! Assay Type Form Component
//!
//! Owns an assay type draft and its custom field definitions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::field_card::field_card;
use crate::components::ordered_list_editor::OrderedListEditor;
use crate::context::AppContext;
use crate::models::CustomField;
use crate::store::{AssayTypeDraft, AssayTypeDraftStoreFields};
use crate::validation::validate_assay_type;

#[component]
pub fn AssayTypeForm(
    /// Assay type being edited; a blank one when absent
    initial: Option<AssayTypeDraft>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let initial = StoredValue::new(initial.unwrap_or_default().normalized());
    let store = Store::new(initial.get_value());
    let (submitting, set_submitting) = signal(false);

    let fields = Signal::derive(move || store.fields().get());
    let on_fields_change = Callback::new(move |fields: Vec<CustomField>| {
        *store.fields().write() = fields;
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store.get_untracked();
        if let Err(err) = validate_assay_type(&draft.name, &draft.fields) {
            log::debug!("[ASSAY TYPE] Validation failed: {}", err);
            ctx.notify_error(err.to_string());
            return;
        }

        set_submitting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match api::save_assay_type(&config, &draft).await {
                Ok(()) => {
                    ctx.notify_success(format!("Saved \"{}\" with {} field(s)", draft.name, draft.fields.len()));
                    initial.try_set_value(draft);
                }
                Err(err) => {
                    log::error!("[ASSAY TYPE] Save failed: {}", err);
                    ctx.notify_error(format!("Could not save assay type: {}", err));
                }
            }
            set_submitting.try_set(false);
        });
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        *store.write() = initial.get_value();
    };

    view! {
        <form class="entity-form assay-type-form" on:submit=on_submit>
            <h2>"Assay type fields"</h2>

            <div class="editor-section">
                <label class="editor-label">"Assay type name"</label>
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
                <label class="editor-label">"Custom fields"</label>
                <OrderedListEditor
                    items=fields
                    on_change=on_fields_change
                    card=Callback::new(field_card)
                    add_label="+ Add field"
                    empty_text="No custom fields"
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
