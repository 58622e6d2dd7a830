use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::api::client::ResumeApi;
use crate::components::dashboard::Dashboard;

/// Base origin of the resume backend. Baked in at build time with
/// `VITAE_API_BASE=https://... trunk build`.
fn api_base() -> &'static str {
    option_env!("VITAE_API_BASE").unwrap_or("http://127.0.0.1:5000")
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ResumeApi::new(api_base()));

    view! {
        <Title text="Vitae - Resume Dashboard"/>

        <nav class="top-nav">
            <div class="logo">"Vitae"</div>
        </nav>
        <main>
            <Dashboard/>
        </main>
    }
}
