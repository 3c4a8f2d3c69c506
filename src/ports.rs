// ABOUTME: Port aggregation over container listings.
// ABOUTME: Deduplicates container/port pairs and computes the display maximum.

use crate::runtime::ContainerRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Lowest value `max_port` may take, so small port sets still render on a
/// sensible scale.
pub const MAX_PORT_FLOOR: u16 = 1024;

/// One display-ready port entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortInfo {
    pub port: u16,
    pub container_name: String,
    pub image_name: String,
    /// Short (12 character) container ID.
    pub container_id: String,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortsResponse {
    /// Entries in first-seen order.
    pub ports: Vec<PortInfo>,
    /// Largest port seen, never below [`MAX_PORT_FLOOR`].
    pub max_port: u16,
}

/// Malformed data reported by the runtime.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("container {id} has no display name")]
    MissingName { id: String },
}

/// Collapse raw container listings into deduplicated port entries.
///
/// A published port wins over the private one. A mapping with no public port
/// falls back to its private port. A mapping with neither is skipped. Each
/// (full container ID, port) pair yields at most one entry.
///
/// Fails on a container without any display name rather than inventing one.
pub fn aggregate(containers: &[ContainerRecord]) -> Result<PortsResponse, AggregateError> {
    let mut ports = Vec::new();
    let mut seen: HashSet<(&str, u16)> = HashSet::new();
    let mut max_port = 0u16;

    for container in containers {
        let name = container
            .names
            .first()
            .map(|n| normalize_name(n))
            .ok_or_else(|| AggregateError::MissingName {
                id: container.id.to_string(),
            })?;

        for mapping in &container.ports {
            let public = mapping.public_port.unwrap_or(0);
            let private = mapping.private_port.unwrap_or(0);

            let port = if public > 0 {
                public
            } else if private > 0 {
                private
            } else {
                continue;
            };

            if !seen.insert((container.id.as_str(), port)) {
                continue;
            }

            ports.push(PortInfo {
                port,
                container_name: name.to_string(),
                image_name: container.image.clone(),
                container_id: container.id.short().to_string(),
            });
            max_port = max_port.max(port);
        }
    }

    Ok(PortsResponse {
        ports,
        max_port: max_port.max(MAX_PORT_FLOOR),
    })
}

/// Strip a single leading `/` from a runtime display name.
pub fn normalize_name(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}
