//! Career Page Component
//!
//! The single template every specialization page renders through, plus
//! the routed view that resolves a slug against the content table. The
//! page wires up the scroll watcher (released on unmount) and the share
//! controls.

use leptos::prelude::*;
use leptos_pagekit::{use_scroll_flag, SCROLL_THRESHOLD_PX};
use leptos_router::hooks::use_params_map;

use crate::components::{BackToTop, NotFound, ShareMenu};
use crate::content;
use crate::models::Specialization;

/// Routed view: look up the slug, fall back to NotFound for unknown ones
#[component]
pub fn CareerView() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        match content::find(&slug) {
            Some(career) => view! { <CareerPage career=career/> }.into_any(),
            None => view! { <NotFound/> }.into_any(),
        }
    }
}

#[component]
pub fn CareerPage(career: &'static Specialization) -> impl IntoView {
    let past_threshold = use_scroll_flag(SCROLL_THRESHOLD_PX);

    view! {
        <article class="career-page">
            <header class="career-hero">
                <h1>{career.title}</h1>
                <p class="tagline">{career.tagline}</p>
                <ShareMenu/>
            </header>

            <section class="career-section overview">
                {career.overview.iter().map(|paragraph| view! {
                    <p>{*paragraph}</p>
                }).collect_view()}
            </section>

            <section class="career-section">
                <h2>"What you'll do"</h2>
                <ul>
                    {career.responsibilities.iter().map(|duty| view! {
                        <li>{*duty}</li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="career-section">
                <h2>"Skills to build"</h2>
                <ul class="skill-list">
                    {career.skills.iter().map(|skill| view! {
                        <li class="skill">{*skill}</li>
                    }).collect_view()}
                </ul>
            </section>

            <section class="career-section">
                <h2>"Salary expectations"</h2>
                <table class="salary-table">
                    <thead>
                        <tr>
                            <th>"Level"</th>
                            <th>"Typical range (US)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {career.salaries.iter().map(|band| view! {
                            <tr>
                                <td>{band.level}</td>
                                <td>{band.range}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="career-section">
                <h2>"Where to study"</h2>
                <ul class="resource-list">
                    {career.resources.iter().map(|resource| view! {
                        <li>
                            <a href=resource.url target="_blank" rel="noreferrer">
                                {resource.title}
                            </a>
                        </li>
                    }).collect_view()}
                </ul>
            </section>

            <BackToTop visible=past_threshold/>
        </article>
    }
}
