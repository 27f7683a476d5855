//! Strongly-typed version label wrapper.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Strongly-typed wrapper for version labels read from `version <label>`
/// markers.
///
/// Labels are opaque: ordering is plain string comparison on the inner
/// value, which matches the reference behavior. The label author is
/// responsible for choosing labels that sort correctly — note that
/// `"0.10"` sorts *before* `"0.2"` under this ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    /// Create a new `VersionLabel`, panicking in debug builds if the label is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(label: impl Into<String>) -> Self {
        let s = label.into();
        debug_assert!(!s.is_empty(), "VersionLabel must not be empty");
        Self(s)
    }

    /// Try to create a new `VersionLabel`, returning `None` if the label is empty.
    pub fn try_new(label: impl Into<String>) -> Option<Self> {
        let s = label.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Return the underlying label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for VersionLabel {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VersionLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VersionLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VersionLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
