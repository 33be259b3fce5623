//! DevAtlas Frontend App
//!
//! Root component: navigation shell around the route table, plus the
//! app-wide notice context.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{CareerView, ContactForm, Footer, Home, Navbar, NotFound, Toast};
use crate::context::{AppContext, Notice};

#[component]
pub fn App() -> impl IntoView {
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    // Provide context to all children
    provide_context(AppContext::new((notice, set_notice)));

    view! {
        <Router>
            <div class="app-layout">
                <Navbar/>

                <main class="page-content">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("/careers/:slug") view=CareerView/>
                        <Route path=path!("/contact") view=ContactForm/>
                    </Routes>
                </main>

                <Footer/>
                <Toast/>
            </div>
        </Router>
    }
}
