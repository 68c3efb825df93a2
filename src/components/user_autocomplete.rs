//! User Autocomplete Component
//!
//! Debounced remote user search for task assignment.
//! Only the newest query's results are shown; slower earlier responses are dropped.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::UserRef;

/// Move the highlighted suggestion by one, staying inside the list
pub fn move_highlight(current: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    }
}

/// Whether a query is long enough to hit the backend
pub fn should_search(query: &str, min_chars: usize) -> bool {
    query.trim().chars().count() >= min_chars.max(1)
}

/// User picker with suggestions
///
/// Props:
/// - selected: Currently assigned user, if any
/// - on_select: Called with the picked user, or `None` when the assignment is cleared
#[component]
pub fn UserAutocomplete(
    #[prop(into)] selected: Signal<Option<UserRef>>,
    #[prop(into)] on_select: Callback<Option<UserRef>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (query, set_query) = signal(String::new());
    let (suggestions, set_suggestions) = signal(Vec::<UserRef>::new());
    let (highlighted, set_highlighted) = signal(0usize);
    // Bumped on every keystroke; a lookup only lands if it is still the latest
    let (request_seq, set_request_seq) = signal(0u32);

    let clear = move || {
        set_query.set(String::new());
        set_suggestions.set(Vec::new());
        set_highlighted.set(0);
        set_request_seq.update(|seq| *seq += 1);
    };

    let pick = move |user: UserRef| {
        clear();
        on_select.run(Some(user));
    };

    let on_input = move |text: String| {
        set_query.set(text.clone());
        set_highlighted.set(0);
        set_request_seq.update(|seq| *seq += 1);
        let seq = request_seq.get_untracked();

        let config = ctx.config();
        if !should_search(&text, config.user_search_min_chars) {
            set_suggestions.set(Vec::new());
            return;
        }
        let text = text.trim().to_string();

        spawn_local(async move {
            TimeoutFuture::new(config.user_search_debounce_ms).await;
            if request_seq.try_get_untracked() != Some(seq) {
                return;
            }
            let users = match api::search_users(&config, &text).await {
                Ok(users) => users,
                Err(err) => {
                    log::warn!("[USERS] Lookup for {:?} failed: {}", text, err);
                    Vec::new()
                }
            };
            if request_seq.try_get_untracked() == Some(seq) {
                set_suggestions.try_set(users);
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let len = suggestions.with(|s| s.len());
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_highlighted.update(|i| *i = move_highlight(*i, len, true));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_highlighted.update(|i| *i = move_highlight(*i, len, false));
            }
            "Enter" | "Tab" => {
                let chosen = suggestions.with(|s| s.get(highlighted.get_untracked()).cloned());
                if let Some(user) = chosen {
                    ev.prevent_default();
                    pick(user);
                }
            }
            "Escape" => clear(),
            _ => {}
        }
    };

    view! {
        <div class="user-autocomplete">
            {move || match selected.get() {
                Some(user) => view! {
                    <span class="assigned-user">
                        <span class="assigned-user-name">{user.label()}</span>
                        <button
                            type="button"
                            class="clear-user-btn"
                            title="Unassign"
                            on:click=move |_| on_select.run(None)
                        >
                            "×"
                        </button>
                    </span>
                }.into_any(),
                None => view! {
                    <input
                        type="text"
                        class="user-search-input"
                        placeholder="Search users..."
                        autocomplete="off"
                        prop:value=move || query.get()
                        on:input=move |ev| on_input(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                }.into_any(),
            }}

            // Suggestions for the current query
            {move || {
                let users = suggestions.get();
                if users.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let current = highlighted.get();
                    view! {
                        <div class="autocomplete-list">
                            {users.into_iter().enumerate().map(|(i, user)| {
                                let label = user.label();
                                view! {
                                    <button
                                        type="button"
                                        class=if i == current { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:mousedown=move |ev: web_sys::MouseEvent| {
                                            // Before the input blurs
                                            ev.prevent_default();
                                            pick(user.clone());
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_highlight_clamps() {
        assert_eq!(move_highlight(0, 3, true), 1);
        assert_eq!(move_highlight(2, 3, true), 2);
        assert_eq!(move_highlight(0, 3, false), 0);
        assert_eq!(move_highlight(2, 3, false), 1);
        assert_eq!(move_highlight(4, 0, true), 0);
    }

    #[test]
    fn test_should_search() {
        assert!(!should_search("a", 2));
        assert!(!should_search("  a  ", 2));
        assert!(should_search("al", 2));
        // A zero minimum still needs one character
        assert!(!should_search("", 0));
        assert!(should_search("é", 1));
    }
}
