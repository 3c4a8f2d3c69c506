// ABOUTME: Configuration loaded from the process environment.
// ABOUTME: Required API key, runtime overrides, and fixed server settings.

mod env_value;

pub use env_value::{EnvSource, ProcessEnv};

use crate::auth::ApiKey;
use crate::error::{Error, Result};
use crate::runtime::{RuntimeConfig, RuntimeType};
use std::net::SocketAddr;
use std::time::Duration;

pub const API_KEY_VAR: &str = "API_KEY";
pub const RUNTIME_VAR: &str = "CONTAINER_RUNTIME";
pub const SOCKET_VAR: &str = "CONTAINER_SOCKET";
pub const DOCKER_HOST_VAR: &str = "DOCKER_HOST";

/// Port the HTTP server always listens on.
pub const LISTEN_PORT: u16 = 3000;

/// How long in-flight requests may run after a shutdown signal.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Upper bound on a single runtime listing.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(15);

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub runtime: RuntimeConfig,
    pub listen_addr: SocketAddr,
    pub shutdown_grace: Duration,
    pub query_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from any environment-like source.
    pub fn from_source(env: &impl EnvSource) -> Result<Self> {
        let api_key = ApiKey::new(env_value::required(env, API_KEY_VAR)?);

        let runtime = env_value::optional(env, RUNTIME_VAR)
            .map(|name| {
                name.parse::<RuntimeType>()
                    .map_err(|e| Error::InvalidConfig(format!("{RUNTIME_VAR}: {e}")))
            })
            .transpose()?;

        let socket = match env_value::optional(env, SOCKET_VAR) {
            Some(socket) => Some(socket),
            None => env_value::optional(env, DOCKER_HOST_VAR)
                .map(|host| socket_from_docker_host(&host))
                .transpose()?,
        };

        Ok(Self {
            api_key,
            runtime: RuntimeConfig { runtime, socket },
            listen_addr: SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT)),
            shutdown_grace: SHUTDOWN_GRACE,
            query_timeout: QUERY_TIMEOUT,
        })
    }
}

/// Extract a socket path from a `unix://` DOCKER_HOST value.
fn socket_from_docker_host(host: &str) -> Result<String> {
    match host.strip_prefix("unix://") {
        Some(path) if !path.is_empty() => Ok(path.to_string()),
        _ => Err(Error::InvalidConfig(format!(
            "{DOCKER_HOST_VAR} must be a unix:// socket, got '{host}'"
        ))),
    }
}
