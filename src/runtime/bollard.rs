// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::{
    ContainerOps, ContainerRecord, ListError, PortMapping, RuntimeInfo,
    RuntimeInfoError, RuntimeMetadata,
};
use crate::runtime::types::RuntimeType;
use crate::types::ContainerId;
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::ListContainersOptions;

/// Seconds bollard waits on a single request before giving up.
const CLIENT_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_list_error(e: bollard::errors::Error) -> ListError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } => ListError::Rejected {
            status: *status_code,
            message: message.clone(),
        },
        bollard::errors::Error::IOError { .. }
        | bollard::errors::Error::HyperResponseError { .. }
        | bollard::errors::Error::RequestTimeoutError => ListError::Unreachable(e.to_string()),
        _ => ListError::Runtime(e.to_string()),
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Holds the single long-lived client for the process. The underlying
/// connection pool is released when the runtime is dropped.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    ///
    /// Use with `resolve_runtime()` or `detect_local()`. No request is sent
    /// here; the first call to the runtime happens lazily.
    pub fn connect(info: &super::types::RuntimeInfo) -> Result<Self, RuntimeInfoError> {
        let client = Docker::connect_with_unix(
            &info.socket_path,
            CLIENT_TIMEOUT_SECS,
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(client, info.runtime_type))
    }
}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let info = self
            .client
            .info()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;

        let name = match self.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: info.server_version.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client
            .ping()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, ListError> {
        let opts = ListContainersOptions {
            all: true,
            ..Default::default()
        };

        // Failures surface immediately; the HTTP layer decides what to do.
        let containers = self
            .client
            .list_containers(Some(opts))
            .await
            .map_err(map_list_error)?;

        tracing::debug!(count = containers.len(), "listed containers");

        Ok(containers
            .into_iter()
            .map(|c| ContainerRecord {
                id: ContainerId::new(c.id.unwrap_or_default()),
                names: c.names.unwrap_or_default(),
                image: c.image.unwrap_or_default(),
                ports: c
                    .ports
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| PortMapping {
                        public_port: p.public_port,
                        private_port: Some(p.private_port),
                    })
                    .collect(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_become_rejections() {
        let err = map_list_error(bollard::errors::Error::DockerResponseServerError {
            status_code: 500,
            message: "daemon exploded".to_string(),
        });
        assert!(matches!(err, ListError::Rejected { status: 500, .. }));
        assert!(err.to_string().contains("daemon exploded"));
    }

    #[test]
    fn request_timeouts_mean_unreachable() {
        let err = map_list_error(bollard::errors::Error::RequestTimeoutError);
        assert!(matches!(err, ListError::Unreachable(_)));
    }
}
