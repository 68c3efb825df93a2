//! Default Value Input Component
//!
//! Picks the control for a custom field's default value from its type.

use leptos::prelude::*;
use serde_json::Value;

use crate::fields::{default_value_text, parse_default_value, DefaultValueControl};
use crate::models::CustomField;

#[component]
pub fn DefaultValueInput(
    #[prop(into)] field: Signal<CustomField>,
    #[prop(into)] on_change: Callback<Option<Value>>,
) -> impl IntoView {
    // Only rebuilt when the type or dropdown options change
    let control = Memo::new(move |_| field.with(DefaultValueControl::for_field));
    let current = move || field.with(|f| default_value_text(f.default_value.as_ref()));
    let commit = move |raw: String| {
        let field_type = field.with_untracked(|f| f.field_type);
        on_change.run(parse_default_value(field_type, &raw));
    };

    move || match control.get() {
        DefaultValueControl::TextInput => view! {
            <input
                type="text"
                class="default-value-input"
                prop:value=current
                on:input=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
        DefaultValueControl::TextArea => view! {
            <textarea
                class="default-value-input"
                rows="3"
                prop:value=current
                on:input=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
        DefaultValueControl::IntegerInput => view! {
            <input
                type="number"
                step="1"
                class="default-value-input"
                prop:value=current
                on:change=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
        DefaultValueControl::FloatInput => view! {
            <input
                type="number"
                step="any"
                class="default-value-input"
                prop:value=current
                on:change=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
        DefaultValueControl::BooleanSelect => view! {
            <select class="default-value-input" on:change=move |ev| commit(event_target_value(&ev))>
                <option value="" prop:selected=move || current().is_empty()>"(none)"</option>
                <option value="true" prop:selected=move || current() == "true">"true"</option>
                <option value="false" prop:selected=move || current() == "false">"false"</option>
            </select>
        }.into_any(),
        DefaultValueControl::DatePicker => view! {
            <input
                type="date"
                class="default-value-input"
                prop:value=current
                on:change=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
        DefaultValueControl::DropdownSelect(options) => view! {
            <select class="default-value-input" on:change=move |ev| commit(event_target_value(&ev))>
                <option value="" prop:selected=move || current().is_empty()>"(none)"</option>
                {options.into_iter().map(|option| {
                    let selected = option.clone();
                    let label = option.clone();
                    view! {
                        <option value=option prop:selected=move || current() == selected>
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>
        }.into_any(),
        DefaultValueControl::Unsupported => view! {
            <span class="default-value-none">"Files have no default value"</span>
        }.into_any(),
    }
}
