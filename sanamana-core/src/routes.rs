//! Route table and the access decision made before each page renders.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Signup,
    Onboarding,
    Home,
    Progress,
    Calendar,
    Profile,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(AppRoute),
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Onboarding => "/onboarding",
            AppRoute::Home => "/",
            AppRoute::Progress => "/progress",
            AppRoute::Calendar => "/calendar",
            AppRoute::Profile => "/profile",
            AppRoute::NotFound => "/404",
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, AppRoute::Login | AppRoute::Signup)
    }

    /// Decide whether this route may render.
    ///
    /// - no session on a protected route goes to login
    /// - a session on login/signup goes home
    /// - onboarding is closed once a profile exists
    pub fn guard(self, has_session: bool, has_profile: bool) -> Access {
        match self {
            AppRoute::NotFound => Access::Allow,
            route if route.is_public() => {
                if has_session {
                    Access::Redirect(AppRoute::Home)
                } else {
                    Access::Allow
                }
            }
            _ if !has_session => Access::Redirect(AppRoute::Login),
            AppRoute::Onboarding if has_profile => Access::Redirect(AppRoute::Home),
            _ => Access::Allow,
        }
    }
}
