//! Error types for RoverNav

use thiserror::Error;

/// RoverNav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Map error: {0}")]
    Map(#[from] planet_map::MapError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scenario error: {0}")]
    Scenario(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for NavError {
    fn from(e: serde_yaml::Error) -> Self {
        NavError::Scenario(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
