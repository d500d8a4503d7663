use std::fmt;

use serde::{Deserialize, Serialize};

/// A string that redacts its contents in Debug and Display.
///
/// Used for credential values (passwords, API tokens, session cookies)
/// so they never end up in logs or error context.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Access the underlying value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Whether the wrapped value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureString(***)")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_debug_and_display() {
        let s = SecureString::new("hunter2");
        assert_eq!(format!("{s:?}"), "SecureString(***)");
        assert_eq!(format!("{s}"), "***");
        assert_eq!(s.expose(), "hunter2");
    }

    #[test]
    fn empty_check() {
        assert!(SecureString::new("").is_empty());
        assert!(!SecureString::new("x").is_empty());
    }

    #[test]
    fn serde_is_transparent() {
        let s = SecureString::new("tok");
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"tok\"");
    }
}
