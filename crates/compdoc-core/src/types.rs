//! Strong domain types for compdoc.
//!
//! Component names are plain directory names on disk, but flow through the
//! pipeline, error messages, and the serialized output. The newtype keeps
//! them from being confused with other strings (paths, descriptions, raw
//! source text).
//!
//! # Examples
//!
//! ```
//! use compdoc_core::ComponentName;
//!
//! let name = ComponentName::new("Button");
//! assert_eq!(name.as_str(), "Button");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Component name (newtype over String).
///
/// The name is always the component's directory name under the components
/// root; the source file inside must share it (`Button/Button.rs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    /// Creates a new component name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ComponentName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ComponentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ComponentName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
