//! Configuration types

pub mod app;
pub mod logging;
pub mod planning;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use planning::PlanningConfig;
