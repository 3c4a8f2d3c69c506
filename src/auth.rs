// ABOUTME: Shared-secret access gate for the HTTP API.
// ABOUTME: Exact comparison against one configured API key, plus bearer header checks.

/// The configured API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

/// Outcome of checking an `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerCheck {
    Authorized,
    Missing,
    Invalid,
}

impl ApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exact, case-sensitive comparison with the configured secret.
    pub fn authorize(&self, provided: &str) -> bool {
        provided == self.0
    }

    /// Check a raw `Authorization` header value of the form `Bearer <secret>`.
    ///
    /// `None` means the header was absent. A value that is not valid UTF-8
    /// should be passed as `Some(b"...")` and is always invalid.
    pub fn check_bearer(&self, header: Option<&[u8]>) -> BearerCheck {
        let Some(raw) = header else {
            return BearerCheck::Missing;
        };
        if raw.is_empty() {
            return BearerCheck::Missing;
        }
        let Ok(value) = std::str::from_utf8(raw) else {
            return BearerCheck::Invalid;
        };
        match value.strip_prefix("Bearer ") {
            Some(token) if self.authorize(token) => BearerCheck::Authorized,
            _ => BearerCheck::Invalid,
        }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_is_case_sensitive() {
        let key = ApiKey::new("secret123");
        assert!(key.authorize("secret123"));
        assert!(!key.authorize("Secret123"));
        assert!(!key.authorize("secret123 "));
        assert!(!key.authorize(""));
    }

    #[test]
    fn bearer_header_must_match_exactly() {
        let key = ApiKey::new("s3cr3t");
        assert_eq!(key.check_bearer(Some(b"Bearer s3cr3t")), BearerCheck::Authorized);
        assert_eq!(key.check_bearer(Some(b"bearer s3cr3t")), BearerCheck::Invalid);
        assert_eq!(key.check_bearer(Some(b"Bearer  s3cr3t")), BearerCheck::Invalid);
        assert_eq!(key.check_bearer(Some(b"s3cr3t")), BearerCheck::Invalid);
        assert_eq!(key.check_bearer(Some(b"Bearer \xff")), BearerCheck::Invalid);
    }

    #[test]
    fn absent_or_empty_header_is_missing() {
        let key = ApiKey::new("s3cr3t");
        assert_eq!(key.check_bearer(None), BearerCheck::Missing);
        assert_eq!(key.check_bearer(Some(b"")), BearerCheck::Missing);
    }

    #[test]
    fn debug_redacts_secret() {
        let key = ApiKey::new("hunter2");
        assert!(!format!("{key:?}").contains("hunter2"));
    }
}
