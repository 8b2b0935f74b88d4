//! Secret string type for safe credential handling.
//!
//! Wraps sensitive values so they cannot leak through debug output or logs.

use std::fmt;

/// A wrapper for secrets that prevents accidental logging.
///
/// `Debug` and `Display` print `[REDACTED]` instead of the value; callers
/// that actually need the secret (e.g. to fill a login form) must go
/// through [`expose_secret`](SecretString::expose_secret).
///
/// # Example
/// ```
/// use diabalance_env::SecretString;
///
/// let password = SecretString::new("hunter2");
/// assert_eq!(format!("{password:?}"), "[REDACTED]");
/// assert_eq!(password.expose_secret(), "hunter2");
/// ```
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Explicitly expose the wrapped value.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // Best-effort memory clearing; the compiler may elide this and
        // copies may exist elsewhere. Use `zeroize` if that ever matters.
        self.0.clear();
        self.0.shrink_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacted() {
        let secret = SecretString::new("super-secret");
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_display_redacted() {
        let secret = SecretString::new("super-secret");
        assert_eq!(format!("{secret}"), "[REDACTED]");
    }

    #[test]
    fn test_expose_secret() {
        let secret = SecretString::new("super-secret");
        assert_eq!(secret.expose_secret(), "super-secret");
    }

    #[test]
    fn test_clone() {
        let secret = SecretString::new("super-secret");
        let cloned = secret.clone();
        assert_eq!(cloned.expose_secret(), "super-secret");
    }
}
