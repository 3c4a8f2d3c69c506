// ABOUTME: Container listing trait for container runtimes.
// ABOUTME: The narrow seam between the HTTP layer and the runtime client.

use super::shared_types::ContainerRecord;
use async_trait::async_trait;

/// Lists containers known to a runtime.
///
/// Implementations return every container, running or stopped, without
/// filtering or interpreting port data. Callers cancel an in-flight listing by
/// dropping the future.
#[async_trait]
pub trait ContainerOps: Send + Sync {
    /// List all containers.
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, ListError>;
}

/// Errors from listing containers.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("runtime unreachable: {0}")]
    Unreachable(String),

    #[error("runtime rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("runtime error: {0}")]
    Runtime(String),
}
