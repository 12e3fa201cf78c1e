
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("{message}")]
    DependencyUnavailable { name: String, message: String },
    #[error("Unknown capability: \"{0}\"")]
    UnknownCapability(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid pattern \"{pattern}\": {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("Key \"{0}\" holds a value and cannot be vivified")]
    LeafCollision(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

// Helper conversions
impl From<config::ConfigError> for ToolkitError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for ToolkitError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}
