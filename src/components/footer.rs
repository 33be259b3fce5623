//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"DevAtlas - career guidance for software engineers."</p>
            <p class="footer-note">
                "Salary figures are indicative ranges for the US market and vary by region."
            </p>
        </footer>
    }
}
