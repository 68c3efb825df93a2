//! Field Card Component
//!
//! Editable body of one custom field definition.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::default_value_input::DefaultValueInput;
use crate::components::ordered_list_editor::CardArgs;
use crate::models::{CustomField, FieldPatch, FieldType};

/// Card renderer for the field list editor
pub fn field_card(args: CardArgs<CustomField>) -> AnyView {
    view! { <FieldCard item=args.item on_patch=args.on_patch /> }.into_any()
}

#[component]
pub fn FieldCard(item: Signal<CustomField>, on_patch: Callback<FieldPatch>) -> impl IntoView {
    let is_dropdown = move || item.with(|f| f.field_type == FieldType::Dropdown);

    view! {
        <div class="field-card">
            <div class="field-card-row">
                <input
                    type="text"
                    class="field-display-name"
                    placeholder="Display name"
                    prop:value=move || item.with(|f| f.display_name.clone())
                    on:input=move |ev| on_patch.run(FieldPatch::display_name(event_target_value(&ev)))
                />
                <code class="field-name" title="Field name">
                    {move || item.with(|f| f.field_name.clone())}
                </code>
            </div>

            <div class="field-card-row">
                <label class="editor-label">"Type"</label>
                <select
                    class="field-type-select"
                    on:change=move |ev| {
                        if let Some(field_type) = FieldType::from_str(&event_target_value(&ev)) {
                            on_patch.run(FieldPatch::field_type(field_type));
                        }
                    }
                >
                    {FieldType::ALL.iter().map(|field_type| {
                        let field_type = *field_type;
                        view! {
                            <option
                                value=field_type.as_str()
                                prop:selected=move || item.with(|f| f.field_type == field_type)
                            >
                                {field_type.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <label class="field-required">
                    <input
                        type="checkbox"
                        prop:checked=move || item.with(|f| f.required)
                        on:change=move |ev| on_patch.run(FieldPatch::required(event_target_checked(&ev)))
                    />
                    "Required"
                </label>
            </div>

            <textarea
                class="field-description"
                placeholder="Description"
                rows="2"
                prop:value=move || item.with(|f| f.description.clone())
                on:input=move |ev| on_patch.run(FieldPatch::description(event_target_value(&ev)))
            />

            <Show when=is_dropdown>
                <div class="field-card-row">
                    <label class="editor-label">"Options (one per line)"</label>
                    <textarea
                        class="field-dropdown-options"
                        rows="4"
                        prop:value=move || item.with(|f| f.dropdown_options.clone().unwrap_or_default())
                        on:input=move |ev| on_patch.run(FieldPatch::dropdown_options(event_target_value(&ev)))
                    />
                </div>
            </Show>

            <div class="field-card-row">
                <label class="editor-label">"Default"</label>
                <DefaultValueInput
                    field=item
                    on_change={move |value: Option<Value>| on_patch.run(FieldPatch::default_value(value))}
                />
            </div>
        </div>
    }
}
