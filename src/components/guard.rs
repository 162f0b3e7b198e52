use leptos::prelude::*;
use leptos_router::components::Redirect;
use sanamana_core::{Access, AppRoute};

use crate::state::use_app;

/// Renders `children` only when `route` is reachable with the current
/// session and profile; otherwise redirects.
///
/// The decision is made once, when the route is entered. Pages that change
/// the session navigate explicitly afterwards.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let app = use_app();
    let has_session = app.session.with_untracked(Option::is_some);
    let has_profile = app.profile.with_untracked(Option::is_some);

    match route.guard(has_session, has_profile) {
        Access::Allow => children().into_any(),
        Access::Redirect(to) => {
            tracing::debug!("{} -> {}", route.path(), to.path());
            view! { <Redirect path=to.path() /> }.into_any()
        }
    }
}
