// ABOUTME: Environment variable lookup helpers for configuration.
// ABOUTME: Treats blank values as unset and reports missing required variables.

use crate::error::{Error, Result};

/// Source of environment-style key/value pairs.
///
/// Implemented for closures so tests can supply values without touching the
/// process environment.
pub trait EnvSource {
    fn get(&self, var: &str) -> Option<String>;
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, var: &str) -> Option<String> {
        self(var)
    }
}

/// Reads from the process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, var: &str) -> Option<String> {
        std::env::var(var).ok()
    }
}

/// Look up an optional variable. Blank values count as unset; others are
/// returned verbatim.
pub fn optional(env: &impl EnvSource, var: &str) -> Option<String> {
    env.get(var).filter(|v| !v.trim().is_empty())
}

/// Look up a variable that must be present and non-blank.
pub fn required(env: &impl EnvSource, var: &str) -> Result<String> {
    optional(env, var).ok_or_else(|| Error::MissingEnvVar(var.to_string()))
}
