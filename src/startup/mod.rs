//! Startup pieces that run before the event loop: configuration, logging
//! and the service health probe.

pub mod config;
pub mod health;
pub mod logging;

pub use config::AppConfig;
pub use health::spawn_health_probe;
pub use logging::{init_logging, LogTarget};
