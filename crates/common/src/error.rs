/// Voxdrop error types
#[derive(Debug, thiserror::Error)]
pub enum VoxdropError {
    /// Object storage related error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Transcription service related error
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VoxdropError {
    /// Create storage error
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }

    /// Create transcription error
    pub fn transcription<S: Into<String>>(msg: S) -> Self {
        Self::Transcription(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl VoxdropError {
    /// Get HTTP status code
    ///
    /// Only caller mistakes are 4xx. Anything coming back from the blob store,
    /// the transcription service or the result fetch is reported as 500,
    /// including a job name the provider does not know
    /// (surfaced as a `Transcription` error).
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Storage(_) => 500,
            Self::Transcription(_) => 500,
            Self::Config(_) => 500,
            Self::Network(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 500,
            Self::Other(_) => 500,
        }
    }
}
