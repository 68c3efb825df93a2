//! Ordered List Editor Component
//!
//! Generic card list with drag-to-reorder, per-card remove and an add button.
//! Holds no state of its own: every edit is reduced against the current
//! `items` and the complete new list is handed to `on_change`.

use leptos::prelude::*;

use crate::ordered::{apply_edit, normalize, ListEdit, OrderedItem};

use leptos_dragdrop::*;

/// What a card renderer gets for one position
pub struct CardArgs<T>
where
    T: OrderedItem + Send + Sync + 'static,
    T::Patch: 'static,
{
    /// Current item at this position
    pub item: Signal<T>,
    /// Merge a partial update into this item
    pub on_patch: Callback<T::Patch>,
}

/// Ordered list editor with DnD support
#[component]
pub fn OrderedListEditor<T>(
    items: Signal<Vec<T>>,
    on_change: Callback<Vec<T>>,
    /// Renders the editable body of one card
    card: Callback<CardArgs<T>, AnyView>,
    #[prop(into)] add_label: String,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    T: OrderedItem + PartialEq + Send + Sync + 'static,
    T::Patch: Send + Sync + 'static,
{
    // Display order, renumbered from position on every load
    let sorted = Memo::new(move |_| normalize(&items.get()));

    // Bumped whenever items change position; rows are keyed by it so a
    // card's local state (half-typed searches) never follows its slot
    let (layout, set_layout) = signal(0u32);
    let last_emitted = StoredValue::new(None::<Vec<T>>);

    let edit = move |edit: ListEdit<T::Patch>| {
        let moves = edit.moves_items();
        if let Some(next) = apply_edit(&sorted.get_untracked(), edit) {
            last_emitted.set_value(Some(next.clone()));
            if moves {
                set_layout.update(|n| *n += 1);
            }
            on_change.run(next);
        }
    };

    // A list replaced by the owner (cancel) starts every row afresh
    Effect::new(move |prev: Option<()>| {
        let current = sorted.get();
        let ours = last_emitted.with_value(|last| last.as_ref() == Some(&current));
        if prev.is_some() && !ours {
            set_layout.update(|n| *n += 1);
        }
    });

    // Create DnD signals
    let dnd = create_dnd_signals();

    bind_global_handlers(dnd, move |source, destination| {
        log::debug!("[LIST] Drop: source={}, destination={:?}", source, destination);
        edit(ListEdit::Reorder { source, destination });
    });

    let len = move || sorted.with(|v| v.len());
    let empty_text = empty_text.unwrap_or_default();

    view! {
        <div class=move || if dnd.dragging().is_some() { "ordered-list dragging" } else { "ordered-list" }>
            <DropSlot dnd=dnd slot=0 />

            // Rows are keyed by position and layout; each row reads its item
            // reactively, so inputs keep focus while their item is edited.
            <For
                each=move || {
                    let layout = layout.get();
                    (0..len()).map(|index| (index, layout)).collect::<Vec<_>>()
                }
                key=|row| *row
                children=move |(index, _layout): (usize, u32)| {
                    let item = Signal::derive(move || {
                        sorted.with(|v| v.get(index).cloned()).unwrap_or_else(|| T::blank(index))
                    });
                    let on_patch = Callback::new(move |patch: T::Patch| edit(ListEdit::Update(index, patch)));
                    let body = card.run(CardArgs { item, on_patch });

                    let is_dragging = move || dnd.dragging() == Some(index);
                    let is_drop_target = move || dnd.is_target(DropTarget::Card(index));
                    let card_class = move || {
                        let mut c = String::from("list-card");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=card_class
                            on:mouseenter=make_on_card_mouseenter(dnd, index)
                            on:mouseleave=make_on_mouseleave(dnd)
                        >
                            <div class="list-card-toolbar">
                                <span
                                    class="drag-handle"
                                    title="Drag to reorder"
                                    on:mousedown=make_on_handle_mousedown(dnd, index)
                                >
                                    "⠿"
                                </span>
                                <span class="list-card-position">{index + 1}</span>
                                <button
                                    type="button"
                                    class="remove-btn"
                                    title="Remove"
                                    on:click=move |_| {
                                        log::debug!("[LIST] Remove at {}", index);
                                        edit(ListEdit::Remove(index));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                            {body}
                        </div>
                        <DropSlot dnd=dnd slot={index + 1} />
                    }
                }
            />

            <Show when=move || len() == 0>
                <p class="list-empty">{empty_text.clone()}</p>
            </Show>

            <button type="button" class="add-item-btn" on:click=move |_| edit(ListEdit::Add)>
                {add_label}
            </button>
        </div>
    }
}

/// Gap between cards that accepts a drop
#[component]
fn DropSlot(dnd: DndSignals, slot: usize) -> impl IntoView {
    let is_active = move || dnd.is_target(DropTarget::Slot(slot));
    let is_dragging = move || dnd.dragging().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=make_on_slot_mouseenter(dnd, slot)
            on:mouseleave=make_on_mouseleave(dnd)
        />
    }
}
