//! `navsync resolve <arguments>` – resolve one route's URL.

use anyhow::Result;
use navsync_core::{BrowserUrlSynchronizer, HistoryError, ResolvedUrl, RouteDescriptor, UrlPlatform};
use serde_json::Value;

/// Reports a fixed path as what the browser shows; never writes.
struct ShownPath<'a>(&'a str);

impl UrlPlatform for ShownPath<'_> {
    fn current_path(&self) -> String {
        self.0.to_string()
    }

    fn replace_browser_url(&self, _url: &ResolvedUrl) -> Result<(), HistoryError> {
        Ok(())
    }

    fn replace_location(&self, _url: &ResolvedUrl) -> Result<(), HistoryError> {
        Ok(())
    }
}

/// Parses `raw` as JSON, falling back to a plain string.
pub(crate) fn parse_arguments(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn run_resolve(arguments: &str, current_path: &str, name: Option<String>) -> Result<()> {
    println!("{}", resolve_with(arguments, current_path, name));
    Ok(())
}

/// `current_path` is only consulted when the arguments are not a string.
pub(crate) fn resolve_with(arguments: &str, current_path: &str, name: Option<String>) -> String {
    let route = RouteDescriptor::from_parts(name, Some(&parse_arguments(arguments)));
    let sync = BrowserUrlSynchronizer::new(ShownPath(current_path));
    sync.resolve(&route).into_string()
}
