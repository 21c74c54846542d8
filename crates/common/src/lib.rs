pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, AWS_REGION, BUCKET_NAME, LANGUAGE_CODE};
pub use error::VoxdropError;
pub type Result<T> = std::result::Result<T, VoxdropError>;
