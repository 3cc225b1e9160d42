//! Name-change domain models.

use std::fmt;

use serde_json::Value;
use zeroize::Zeroize;

/// Caller-supplied session credential for the upstream platform.
///
/// Holds the raw cookie value for the duration of a single request. The
/// `Debug` output is redacted and the backing memory is wiped on drop.
pub struct SessionCredential {
    value: String,
}

impl SessionCredential {
    #[must_use]
    pub fn new(value: String) -> Self {
        Self { value }
    }

    /// Raw credential value. Only the upstream client should read this, to
    /// build the outbound cookie header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(**redacted**)")
    }
}

impl Drop for SessionCredential {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Accepted name change, carrying the upstream response body.
#[derive(Debug)]
pub struct NameChanged {
    /// Upstream response body, passed through to the caller untouched.
    pub payload: Value,
}
