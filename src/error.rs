use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, MetadataError>;

// Helper conversions
impl From<config::ConfigError> for MetadataError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
