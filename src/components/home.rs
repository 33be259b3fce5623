//! Home Page Component
//!
//! Index of every specialization, one card per page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h1>"Find your path in software"</h1>
                <p>
                    "What the work is actually like, what it pays, and where to \
                     start learning - one page per specialization."
                </p>
            </section>

            <section class="career-grid">
                {content::SPECIALIZATIONS.iter().map(|entry| view! {
                    <A href=format!("/careers/{}", entry.slug)>
                        <div class="career-card">
                            <h3>{entry.title}</h3>
                            <p>{entry.tagline}</p>
                        </div>
                    </A>
                }).collect_view()}
            </section>
        </div>
    }
}
