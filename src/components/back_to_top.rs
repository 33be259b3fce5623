//! Back To Top Component
//!
//! Shown once the page is scrolled past the threshold; clicking scrolls
//! the viewport smoothly back to the top.

use leptos::prelude::*;

#[component]
pub fn BackToTop(visible: ReadSignal<bool>) -> impl IntoView {
    let scroll_to_top = move |_| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <Show when=move || visible.get()>
            <button class="back-to-top" title="Back to top" on:click=scroll_to_top>
                "↑"
            </button>
        </Show>
    }
}
