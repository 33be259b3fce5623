//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/">
                <span class="brand">"DevAtlas"</span>
            </A>
            <div class="nav-links">
                <A href="/">"Careers"</A>
                <A href="/contact">"Contact"</A>
            </div>
        </nav>
    }
}
