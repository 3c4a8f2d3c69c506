// ABOUTME: Library root for portline - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod assets;
pub mod auth;
pub mod config;
pub mod error;
pub mod ports;
pub mod runtime;
pub mod server;
pub mod types;
