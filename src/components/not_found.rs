//! Not Found Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to the careers index"</A>
        </div>
    }
}
