//! History primitives the synchronizer writes through.
//!
//! The browser-backed [`WebHistory`] only exists on `wasm32` with the `web`
//! feature; every other build gets [`NoopHistory`]. [`DefaultPlatform`] names
//! whichever one this build carries, so there is no runtime platform check.

mod memory;
mod noop;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;

pub use memory::MemoryHistory;
pub use noop::NoopHistory;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebHistory;

use crate::error::HistoryError;
use crate::url_model::ResolvedUrl;
use std::rc::Rc;

/// Platform primitive for reading and rewriting the displayed URL.
pub trait UrlPlatform {
    /// Path the address bar currently shows.
    fn current_path(&self) -> String;

    /// Replace the current history entry's URL in place. Must not navigate,
    /// reload, or add an entry.
    fn replace_browser_url(&self, url: &ResolvedUrl) -> Result<(), HistoryError>;

    /// Full navigation to `url` that replaces the current entry (reloads).
    fn replace_location(&self, url: &ResolvedUrl) -> Result<(), HistoryError>;
}

impl<P: UrlPlatform + ?Sized> UrlPlatform for &P {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn replace_browser_url(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        (**self).replace_browser_url(url)
    }

    fn replace_location(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        (**self).replace_location(url)
    }
}

impl<P: UrlPlatform + ?Sized> UrlPlatform for Rc<P> {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn replace_browser_url(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        (**self).replace_browser_url(url)
    }

    fn replace_location(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        (**self).replace_location(url)
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type DefaultPlatform = WebHistory;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type DefaultPlatform = NoopHistory;
