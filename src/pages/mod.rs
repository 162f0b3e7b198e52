pub mod auth;
pub mod calendar;
pub mod home;
pub mod not_found;
pub mod onboarding;
pub mod profile;
pub mod progress;
