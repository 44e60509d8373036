//! Route descriptors and navigation events as handed over by the host router.
//!
//! Routers typically attach an untyped `arguments` payload to each route. It
//! is converted to a [`RouteUrlHint`] here, at the boundary, so nothing past
//! this module ever has to test the payload's runtime type.

use serde::Deserialize;
use serde_json::Value;

/// What a route says about the URL it should be shown under.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteUrlHint {
    /// The route's arguments were a string; use it as the URL.
    ExplicitUrl(String),
    /// No usable URL; fall back to whatever the browser currently shows.
    #[default]
    NoHint,
}

impl RouteUrlHint {
    /// Converts an untyped arguments payload. Only a JSON string counts as a
    /// URL; null, numbers, booleans, arrays and objects all yield `NoHint`.
    pub fn from_arguments(arguments: Option<&Value>) -> Self {
        match arguments {
            Some(Value::String(url)) => RouteUrlHint::ExplicitUrl(url.clone()),
            _ => RouteUrlHint::NoHint,
        }
    }
}

impl From<&str> for RouteUrlHint {
    fn from(url: &str) -> Self {
        RouteUrlHint::ExplicitUrl(url.to_string())
    }
}

impl From<String> for RouteUrlHint {
    fn from(url: String) -> Self {
        RouteUrlHint::ExplicitUrl(url)
    }
}

/// Host-owned description of a navigation target.
///
/// Deserializes from `{ "name": ..., "arguments": ... }` with any JSON value
/// for `arguments`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawRoute")]
pub struct RouteDescriptor {
    pub name: Option<String>,
    pub url_hint: RouteUrlHint,
}

impl RouteDescriptor {
    /// A route with an explicit URL and no name.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            name: None,
            url_hint: RouteUrlHint::ExplicitUrl(url.into()),
        }
    }

    /// A named route without a URL hint.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url_hint: RouteUrlHint::NoHint,
        }
    }

    /// Builds a descriptor from the router's raw `name` and `arguments` fields.
    pub fn from_parts(name: Option<String>, arguments: Option<&Value>) -> Self {
        Self {
            name,
            url_hint: RouteUrlHint::from_arguments(arguments),
        }
    }
}

#[derive(Deserialize)]
struct RawRoute {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    arguments: Option<Value>,
}

impl From<RawRoute> for RouteDescriptor {
    fn from(raw: RawRoute) -> Self {
        RouteDescriptor::from_parts(raw.name, raw.arguments.as_ref())
    }
}

/// One navigation lifecycle notification. Routes are borrowed from the host
/// for the duration of a single callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent<'a> {
    Push {
        route: &'a RouteDescriptor,
        previous: Option<&'a RouteDescriptor>,
    },
    Replace {
        new_route: Option<&'a RouteDescriptor>,
        old_route: Option<&'a RouteDescriptor>,
    },
    Pop {
        route: &'a RouteDescriptor,
        previous: Option<&'a RouteDescriptor>,
    },
}

impl NavigationEvent<'_> {
    /// Lowercase event kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationEvent::Push { .. } => "push",
            NavigationEvent::Replace { .. } => "replace",
            NavigationEvent::Pop { .. } => "pop",
        }
    }
}
