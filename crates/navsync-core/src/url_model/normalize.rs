//! Leading-slash normalization.

use std::fmt;

/// A URL ready for the history primitive: never empty, always starts with `/`.
///
/// Only [`ResolvedUrl::normalize`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedUrl(String);

impl ResolvedUrl {
    /// Prepends `/` when `raw` does not already start with one.
    ///
    /// - `"settings"` → `"/settings"`
    /// - `"/settings"` → `"/settings"`
    /// - `""` → `"/"`
    pub fn normalize(raw: &str) -> Self {
        if raw.starts_with('/') {
            ResolvedUrl(raw.to_string())
        } else {
            ResolvedUrl(format!("/{raw}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ResolvedUrl {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ResolvedUrl {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
