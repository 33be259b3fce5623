//! Share Menu Component
//!
//! Share button with an anchored popup: one entry per supported platform
//! plus copy-link. Selection opens the platform's share intent in a new
//! tab and closes the menu.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::share::{self, ShareTarget};

/// Current page URL as the browser reports it
fn current_page_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

#[component]
pub fn ShareMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let menu = leptos_pagekit::create_share_menu();

    let open_menu = move |ev: web_sys::MouseEvent| menu.open_from_event(&ev);

    let select = move |platform: &'static str| {
        match share::share_url(platform, &current_page_url()) {
            Ok(intent) => {
                if let Some(window) = web_sys::window() {
                    if window.open_with_url_and_target(&intent, "_blank").is_err() {
                        log::warn!("share window blocked for {}", platform);
                    }
                }
            }
            Err(unsupported) => ctx.show_notice(unsupported.to_string()),
        }
        menu.close();
    };

    let copy_link = move |_| {
        menu.close();
        let url = current_page_url();
        spawn_local(async move {
            match leptos_pagekit::copy_text(&url).await {
                Ok(()) => ctx.show_notice("Link copied to clipboard"),
                Err(cause) => {
                    log::warn!("clipboard write failed: {}", cause);
                    ctx.show_notice("Could not copy the link");
                }
            }
        });
    };

    view! {
        <div class="share-controls">
            <button class="share-btn" on:click=open_menu disabled=move || menu.is_open()>
                "Share"
            </button>

            {move || menu.anchor().map(|anchor| view! {
                <div class="share-backdrop" on:click=move |_| menu.close()></div>
                <div
                    class="share-menu"
                    style=format!("left:{}px;top:{}px", anchor.x, anchor.y)
                >
                    {ShareTarget::ALL.iter().map(|target| {
                        let name = target.name();
                        view! {
                            <button class="share-item" on:click=move |_| select(name)>
                                {target.label()}
                            </button>
                        }
                    }).collect_view()}
                    <button class="share-item copy" on:click=copy_link>"Copy link"</button>
                </div>
            })}
        </div>
    }
}
