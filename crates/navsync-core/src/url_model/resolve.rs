//! Route URL resolution.

use super::ResolvedUrl;
use crate::route::RouteUrlHint;

/// Resolves the URL a route should be shown under.
///
/// An explicit URL is used verbatim; otherwise `current_path` is called to
/// read what the browser shows right now. Either way the result is normalized.
/// `current_path` is only invoked on the fallback branch.
pub fn resolve_url<F>(hint: &RouteUrlHint, current_path: F) -> ResolvedUrl
where
    F: FnOnce() -> String,
{
    match hint {
        RouteUrlHint::ExplicitUrl(url) => ResolvedUrl::normalize(url),
        RouteUrlHint::NoHint => ResolvedUrl::normalize(&current_path()),
    }
}
