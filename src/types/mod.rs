// ABOUTME: Type-safe identifiers shared by the runtime adapter and aggregator.
// ABOUTME: Uses phantom types to keep container IDs distinct from plain strings.

mod id;

pub use id::{ContainerId, SHORT_ID_LEN};
