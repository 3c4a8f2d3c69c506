// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: ContainerRecord and PortMapping as reported by the runtime's list call.

use crate::types::ContainerId;

/// One container as reported by the runtime's list call.
///
/// The adapter passes these through uninterpreted; the port aggregator decides
/// what is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    /// Full container ID.
    pub id: ContainerId,
    /// Display names, usually with a leading `/`.
    pub names: Vec<String>,
    /// Image reference the container was created from.
    pub image: String,
    /// Port mappings in runtime order.
    pub ports: Vec<PortMapping>,
}

impl ContainerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: ContainerId::new(id),
            names: vec![name.into()],
            image: image.into(),
            ports: Vec::new(),
        }
    }

    /// Append a port mapping.
    pub fn with_port(mut self, mapping: PortMapping) -> Self {
        self.ports.push(mapping);
        self
    }
}

/// A single port mapping on a container.
///
/// A port of `None` and a port of `0` both mean "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortMapping {
    /// Host-visible port, if published.
    pub public_port: Option<u16>,
    /// Container-internal port.
    pub private_port: Option<u16>,
}

impl PortMapping {
    /// Mapping published on the host.
    pub fn published(public_port: u16, private_port: u16) -> Self {
        Self {
            public_port: Some(public_port),
            private_port: Some(private_port),
        }
    }

    /// Mapping exposed inside the container only.
    pub fn exposed(private_port: u16) -> Self {
        Self {
            public_port: None,
            private_port: Some(private_port),
        }
    }
}

/// Runtime metadata reported at startup.
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name (Docker or Podman).
    pub name: String,
    /// Runtime version.
    pub version: String,
}
