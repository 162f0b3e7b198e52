use leptos::prelude::*;

#[component]
pub fn Logo(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("logo {}", class)>
            <div class="logo-title">"Sanamana"</div>
            <div class="logo-subtitle">"Cleanse Companion"</div>
        </div>
    }
}
