mod api;
mod constants;
pub mod error;

pub use api::{schedule_initialize, AnalyticsBootstrap};
pub use constants::{ANALYTICS_LOGGER_NAME, ENTRY_POINT_NAME, INITIALIZED_MESSAGE};
