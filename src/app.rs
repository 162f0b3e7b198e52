use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use sanamana_core::{default_config, AppRoute, AuthMode};

use crate::components::guard::Guarded;
use crate::components::layout::Layout;
use crate::pages::auth::AuthPage;
use crate::pages::calendar::CalendarPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::onboarding::OnboardingPage;
use crate::pages::profile::ProfilePage;
use crate::pages::progress::ProgressPage;
use crate::state::AppContext;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::load(default_config()));

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    // Public
                    <Route
                        path=path!("/login")
                        view=|| view! {
                            <Guarded route=AppRoute::Login>
                                <AuthPage mode=AuthMode::Login />
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/signup")
                        view=|| view! {
                            <Guarded route=AppRoute::Signup>
                                <AuthPage mode=AuthMode::Signup />
                            </Guarded>
                        }
                    />

                    // Signed in
                    <Route
                        path=path!("/onboarding")
                        view=|| view! {
                            <Guarded route=AppRoute::Onboarding>
                                <OnboardingPage />
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/")
                        view=|| view! {
                            <Guarded route=AppRoute::Home>
                                <Layout><HomePage /></Layout>
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/progress")
                        view=|| view! {
                            <Guarded route=AppRoute::Progress>
                                <Layout><ProgressPage /></Layout>
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/calendar")
                        view=|| view! {
                            <Guarded route=AppRoute::Calendar>
                                <Layout><CalendarPage /></Layout>
                            </Guarded>
                        }
                    />
                    <Route
                        path=path!("/profile")
                        view=|| view! {
                            <Guarded route=AppRoute::Profile>
                                <Layout><ProfilePage /></Layout>
                            </Guarded>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
