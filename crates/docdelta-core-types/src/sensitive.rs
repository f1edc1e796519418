//! Redaction wrapper for document text
//!
//! Compared documents may be contracts, medical notes, anything. They are
//! wrapped in `Sensitive` wherever they could reach a `Debug` or `Display`
//! sink, so a stray `?field` in a log macro prints a placeholder instead.

use std::fmt;

/// Wrapper that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use docdelta_core_types::Sensitive;
///
/// let body = Sensitive::new("Party A shall pay...");
/// assert_eq!(format!("{:?}", body), "***REDACTED***");
/// assert_eq!(body.expose(), &"Party A shall pay...");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<str>> Sensitive<T> {
    /// Size of the wrapped text in bytes, safe to log
    pub fn byte_len(&self) -> usize {
        self.0.as_ref().len()
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
