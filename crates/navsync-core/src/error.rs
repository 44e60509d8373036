//! Errors raised by history primitives.

/// Failure reported by a [`UrlPlatform`](crate::platform::UrlPlatform) primitive.
///
/// The synchronizer passes these through untouched; deciding what to do about
/// a broken history API is up to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// No global `window` (e.g. running inside a worker).
    #[error("no browser window available")]
    NoWindow,
    /// The browser rejected the call (e.g. `SecurityError` from `replaceState`).
    #[error("history call failed: {0}")]
    Js(String),
    /// The target would leave the current origin.
    #[error("cross-origin history update refused: {0}")]
    CrossOrigin(String),
    /// The target could not be resolved against the current location.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
