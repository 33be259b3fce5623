//! Toast Component
//!
//! Renders the app-wide transient notice, if one is showing.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|notice| view! {
            <div class="toast" role="status">{notice.text}</div>
        })}
    }
}
