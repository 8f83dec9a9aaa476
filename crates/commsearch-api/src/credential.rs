//! Session credential handling.
//!
//! The session itself is owned by the external session provider; this module
//! only carries the opaque cookie value it issued and formats it for the
//! backend. Credentials are passed explicitly into every call instead of
//! living in ambient/global state.

use std::fmt;

/// Name of the session cookie the backend expects.
pub const SESSION_COOKIE: &str = "comms_auth";

/// Opaque per-user session token forwarded to the backend on each request.
///
/// The value is a secret. `Debug` output is redacted so the token cannot
/// leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a session cookie value issued by the session provider.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Formats the credential as a `Cookie` header value.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.0)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
