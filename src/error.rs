use std::io;
use thiserror::Error;

/// Error type for the dashboard library
#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Metric unavailable: {0}")]
    MetricUnavailable(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Sampler error: {0}")]
    Sampler(String),
}

/// Result type alias for the dashboard library
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DashError::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal<S: Into<String>>(msg: S) -> Self {
        DashError::Terminal(msg.into())
    }

    pub fn metric_unavailable<S: Into<String>>(msg: S) -> Self {
        DashError::MetricUnavailable(msg.into())
    }

    pub fn invalid_geometry<S: Into<String>>(msg: S) -> Self {
        DashError::InvalidGeometry(msg.into())
    }

    pub fn sampler<S: Into<String>>(msg: S) -> Self {
        DashError::Sampler(msg.into())
    }
}
