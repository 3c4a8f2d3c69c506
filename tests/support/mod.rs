// ABOUTME: Test support utilities.
// ABOUTME: Tracing setup and an in-memory ContainerOps fake for handler tests.

use async_trait::async_trait;
use portline::runtime::{ContainerOps, ContainerRecord, ListError};
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter =
            EnvFilter::from_default_env().add_directive("portline=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// What the fake runtime answers with.
#[allow(dead_code)]
pub enum FakeResponse {
    Containers(Vec<ContainerRecord>),
    Unreachable(String),
    /// Sleep before answering with an empty list.
    Slow(Duration),
}

/// In-memory stand-in for a container runtime.
pub struct FakeRuntime {
    response: FakeResponse,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeRuntime {
    pub fn with_containers(containers: Vec<ContainerRecord>) -> Self {
        Self::new(FakeResponse::Containers(containers))
    }

    pub fn unreachable(message: &str) -> Self {
        Self::new(FakeResponse::Unreachable(message.to_string()))
    }

    pub fn slow(delay: Duration) -> Self {
        Self::new(FakeResponse::Slow(delay))
    }

    fn new(response: FakeResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of list calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerRecord>, ListError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            FakeResponse::Containers(containers) => Ok(containers.clone()),
            FakeResponse::Unreachable(message) => Err(ListError::Unreachable(message.clone())),
            FakeResponse::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(Vec::new())
            }
        }
    }
}
