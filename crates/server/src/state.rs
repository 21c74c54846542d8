use voxdrop_common::AppConfig;

use crate::workflow::TranscriptionWorkflow;

/// Shared application state
///
/// Read-only after startup; holds no per-job data.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Upload and status sequencing over the provider clients
    pub workflow: TranscriptionWorkflow,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, workflow: TranscriptionWorkflow) -> Self {
        Self { config, workflow }
    }
}
