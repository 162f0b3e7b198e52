use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <div class="layout-content">{children()}</div>
            <NavBar />
        </div>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <ul class="nav-list">
                <li class="nav-item"><A href="/">"Home"</A></li>
                <li class="nav-item"><A href="/progress">"Progress"</A></li>
                <li class="nav-item"><A href="/calendar">"Calendar"</A></li>
                <li class="nav-item"><A href="/profile">"Profile"</A></li>
            </ul>
        </nav>
    }
}
