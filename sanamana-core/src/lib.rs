pub mod actions;
pub mod calendar;
pub mod chart;
pub mod config;
mod error;
pub mod metrics;
pub mod model;
pub mod routes;
pub mod session;
pub mod store;
pub mod tracking;
pub mod window;

pub use config::{default_config, AppConfig};
pub use error::{Result, SanamanaError};
pub use metrics::ProgressStats;
pub use model::{LogEntry, Phase, Profile, ProfileDetails, Reading};
pub use routes::{Access, AppRoute};
pub use session::{AuthMode, Credentials, Session};
pub use store::{KeyValueStore, MemoryStore, Records};
pub use tracking::Upsert;
pub use window::TimeWindow;
