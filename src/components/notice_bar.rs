//! Notice Bar Component
//!
//! Shows the current success or error notice from the app context.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice-bar success",
                NoticeKind::Error => "notice-bar error",
            };
            view! {
                <div class=class role="status">
                    <span class="notice-text">{notice.message}</span>
                    <button type="button" class="close-btn" on:click=move |_| ctx.dismiss()>"×"</button>
                </div>
            }
        })
    }
}
