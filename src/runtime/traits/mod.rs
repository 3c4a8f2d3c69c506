// ABOUTME: Capability traits for container runtimes.
// ABOUTME: Defines ContainerOps and RuntimeInfo plus the records they return.

mod container;
mod runtime_info;
mod shared_types;

pub use container::{ContainerOps, ListError};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError};
pub use shared_types::*;
