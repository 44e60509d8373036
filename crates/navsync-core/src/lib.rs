//! Browser URL synchronization for client-side routers.
//!
//! A host router reports push/replace/pop navigations to a
//! [`BrowserUrlSynchronizer`], which rewrites the current history entry so the
//! address bar follows in-app navigation without growing the history stack.

pub mod error;
pub mod platform;
pub mod route;
pub mod synchronizer;
pub mod url_model;

pub use error::HistoryError;
pub use platform::{DefaultPlatform, MemoryHistory, NoopHistory, UrlPlatform};
pub use route::{NavigationEvent, RouteDescriptor, RouteUrlHint};
pub use synchronizer::{BrowserUrlSynchronizer, NavigatorObserver};
pub use url_model::ResolvedUrl;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use platform::WebHistory;

/// Everything a host router needs to wire the synchronizer in.
pub mod prelude {
    pub use crate::error::HistoryError;
    pub use crate::platform::{DefaultPlatform, UrlPlatform};
    pub use crate::route::{NavigationEvent, RouteDescriptor, RouteUrlHint};
    pub use crate::synchronizer::{BrowserUrlSynchronizer, NavigatorObserver};
    pub use crate::url_model::ResolvedUrl;

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    pub use crate::platform::WebHistory;
}
