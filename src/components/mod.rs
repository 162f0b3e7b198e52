pub mod calendar_view;
pub mod details_form;
pub mod guard;
pub mod layout;
pub mod logo;
pub mod progress_chart;
pub mod quick_log_card;
pub mod stats_card;
pub mod status_card;
