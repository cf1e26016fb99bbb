use crate::usecases::u001_generate_table::GenerateWidget;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <GenerateWidget />
        </main>
    }
}
