pub mod config;
pub mod errors;

pub use config::{AppConfig, LoggingConfig, WorkspaceConfig};
pub use errors::{ConversionError, Result};
