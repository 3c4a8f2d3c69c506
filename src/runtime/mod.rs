// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detection, the bollard-backed client, and the listing trait it implements.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local, resolve_runtime};
pub use error::RuntimeError;
pub use traits::{
    ContainerOps, ContainerRecord, ListError, PortMapping, RuntimeInfo as RuntimeInfoTrait,
    RuntimeInfoError, RuntimeMetadata,
};
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType, UnknownRuntimeType};
