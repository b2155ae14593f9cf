//! Configuration types

mod app;
mod broker;
mod environment;
mod logging;
mod scanner;

pub use app::AppConfig;
pub use broker::BrokerConfig;
pub use environment::EnvironmentConfig;
pub use logging::LoggingConfig;
pub use scanner::ScannerConfig;
