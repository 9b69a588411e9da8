//! Provider secret key handling.

use std::fmt;

use zeroize::Zeroize;

/// The Paystack secret key. Wiped from memory on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    value: String,
}

impl SecretKey {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(**redacted**)")
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let key = SecretKey::new("sk_test_abc123");

        let rendered = format!("{key:?}");

        assert!(!rendered.contains("abc123"));
        assert_eq!(rendered, "SecretKey(**redacted**)");
    }

    #[test]
    fn exposes_the_raw_value() {
        assert_eq!(SecretKey::new("sk_test_abc123").expose(), "sk_test_abc123");
        assert!(SecretKey::new("").is_empty());
    }
}
