use crate::error::VoxdropError;
use std::path::PathBuf;

/// AWS region all clients talk to
pub const AWS_REGION: &str = "ap-southeast-2";

/// Bucket holding uploaded media and transcription output
pub const BUCKET_NAME: &str = "node-transcript";

/// Language every transcription job is started with
pub const LANGUAGE_CODE: &str = "en-US";

/// Voxdrop application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// AWS access key id (falls back to the default chain when unset)
    pub aws_access_key_id: Option<String>,

    /// AWS secret access key
    pub aws_secret_access_key: Option<String>,

    /// AWS region (fixed)
    pub aws_region: String,

    /// Bucket name (fixed)
    pub bucket: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("aws_access_key_id", &self.aws_access_key_id.as_ref().map(|_| "***"))
            .field("aws_secret_access_key", &self.aws_secret_access_key.as_ref().map(|_| "***"))
            .field("aws_region", &self.aws_region)
            .field("bucket", &self.bucket)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            aws_access_key_id: None,
            aws_secret_access_key: None,
            aws_region: AWS_REGION.to_string(),
            bucket: BUCKET_NAME.to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, VoxdropError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            aws_access_key_id: Self::get_env_non_empty("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: Self::get_env_non_empty("AWS_SECRET_ACCESS_KEY"),
            aws_region: AWS_REGION.to_string(),
            bucket: BUCKET_NAME.to_string(),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        Ok(config)
    }

    fn get_env_non_empty(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    /// Whether both halves of a static key pair are present
    pub fn has_static_credentials(&self) -> bool {
        self.aws_access_key_id.is_some() && self.aws_secret_access_key.is_some()
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), VoxdropError> {
        if self.bucket.is_empty() {
            return Err(VoxdropError::config("Bucket name cannot be empty"));
        }

        if self.aws_region.is_empty() {
            return Err(VoxdropError::config("AWS region cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(VoxdropError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
