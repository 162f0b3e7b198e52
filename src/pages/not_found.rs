use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-centered not-found-page">
            <h1>"404"</h1>
            <p class="page-description">"Oops! Page not found"</p>
            <a href="/" class="btn btn-primary">"Return to Home"</a>
        </div>
    }
}
