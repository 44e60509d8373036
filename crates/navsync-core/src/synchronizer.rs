//! Navigation observer that keeps the address bar in step with the router.
//!
//! By the time the router notifies observers it has already put the new
//! location on screen. The synchronizer rewrites the current history entry in
//! place so repeated navigations do not pile up entries. Pops are left alone:
//! the browser moved its own cursor and already shows the right URL.

use crate::error::HistoryError;
use crate::platform::{DefaultPlatform, UrlPlatform};
use crate::route::{NavigationEvent, RouteDescriptor};
use crate::url_model::{resolve_url, ResolvedUrl};

/// Callbacks a host router invokes, on its UI thread, in navigation order.
pub trait NavigatorObserver {
    fn did_push(
        &self,
        route: &RouteDescriptor,
        previous: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError>;

    fn did_replace(
        &self,
        new_route: Option<&RouteDescriptor>,
        old_route: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError>;

    fn did_pop(
        &self,
        route: &RouteDescriptor,
        previous: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError>;
}

/// Rewrites the current history entry on push and replace; ignores pop.
#[derive(Debug, Default, Clone)]
pub struct BrowserUrlSynchronizer<P = DefaultPlatform> {
    platform: P,
}

impl<P: UrlPlatform> BrowserUrlSynchronizer<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn into_platform(self) -> P {
        self.platform
    }

    /// The URL `route` would be shown under right now.
    pub fn resolve(&self, route: &RouteDescriptor) -> ResolvedUrl {
        resolve_url(&route.url_hint, || self.platform.current_path())
    }

    /// Applies the URL for `route`. `previous` is unused.
    pub fn on_push(
        &self,
        route: &RouteDescriptor,
        _previous: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError> {
        self.apply("push", route)
    }

    /// Applies the URL for `new_route`; nothing happens when it is absent.
    pub fn on_replace(
        &self,
        new_route: Option<&RouteDescriptor>,
        _old_route: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError> {
        match new_route {
            Some(route) => self.apply("replace", route),
            None => {
                tracing::debug!("replace without a new route, leaving url alone");
                Ok(())
            }
        }
    }

    /// Never touches history; back/forward already updated the address bar.
    pub fn on_pop(
        &self,
        route: &RouteDescriptor,
        _previous: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError> {
        tracing::trace!(route = ?route.name, "pop, url left to the browser");
        Ok(())
    }

    /// Dispatches one event to the matching handler.
    pub fn observe(&self, event: &NavigationEvent<'_>) -> Result<(), HistoryError> {
        match *event {
            NavigationEvent::Push { route, previous } => self.on_push(route, previous),
            NavigationEvent::Replace {
                new_route,
                old_route,
            } => self.on_replace(new_route, old_route),
            NavigationEvent::Pop { route, previous } => self.on_pop(route, previous),
        }
    }

    fn apply(&self, kind: &str, route: &RouteDescriptor) -> Result<(), HistoryError> {
        let url = self.resolve(route);
        tracing::debug!(route = ?route.name, "{}: replacing browser url with {}", kind, url);
        self.platform.replace_browser_url(&url)
    }
}

impl<P: UrlPlatform> NavigatorObserver for BrowserUrlSynchronizer<P> {
    fn did_push(
        &self,
        route: &RouteDescriptor,
        previous: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError> {
        self.on_push(route, previous)
    }

    fn did_replace(
        &self,
        new_route: Option<&RouteDescriptor>,
        old_route: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError> {
        self.on_replace(new_route, old_route)
    }

    fn did_pop(
        &self,
        route: &RouteDescriptor,
        previous: Option<&RouteDescriptor>,
    ) -> Result<(), HistoryError> {
        self.on_pop(route, previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryHistory, NoopHistory};

    fn sync_at(path: &str) -> BrowserUrlSynchronizer<MemoryHistory> {
        let history = MemoryHistory::new("http://localhost/").unwrap();
        history.push(path).unwrap();
        BrowserUrlSynchronizer::new(history)
    }

    #[test]
    fn push_applies_explicit_url() {
        let sync = sync_at("/");
        sync.on_push(&RouteDescriptor::with_url("settings"), None).unwrap();
        assert_eq!(
            sync.platform().replaced(),
            vec![ResolvedUrl::normalize("/settings")]
        );
        assert_eq!(sync.platform().current_path(), "/settings");
    }

    #[test]
    fn push_without_hint_keeps_current_path() {
        let sync = sync_at("/home");
        sync.on_push(&RouteDescriptor::named("home"), None).unwrap();
        sync.on_push(&RouteDescriptor::default(), None).unwrap();
        assert_eq!(
            sync.platform().replaced(),
            vec![ResolvedUrl::normalize("/home"), ResolvedUrl::normalize("/home")]
        );
    }

    #[test]
    fn replace_without_new_route_does_nothing() {
        let sync = sync_at("/a");
        let old = RouteDescriptor::with_url("b");
        sync.on_replace(None, Some(&old)).unwrap();
        sync.on_replace(None, None).unwrap();
        assert!(sync.platform().replaced().is_empty());
    }

    #[test]
    fn pop_never_touches_history() {
        let sync = sync_at("/a");
        let route = RouteDescriptor::with_url("x");
        let previous = RouteDescriptor::with_url("y");
        sync.on_pop(&route, Some(&previous)).unwrap();
        sync.on_pop(&route, None).unwrap();
        assert!(sync.platform().replaced().is_empty());
        assert!(sync.platform().reloads().is_empty());
        assert_eq!(sync.platform().current_path(), "/a");
    }

    #[test]
    fn observe_dispatches_by_kind() {
        let sync = sync_at("/");
        let a = RouteDescriptor::with_url("a");
        let b = RouteDescriptor::with_url("b");
        sync.observe(&NavigationEvent::Push {
            route: &a,
            previous: None,
        })
        .unwrap();
        sync.observe(&NavigationEvent::Replace {
            new_route: Some(&b),
            old_route: Some(&a),
        })
        .unwrap();
        sync.observe(&NavigationEvent::Pop {
            route: &b,
            previous: Some(&a),
        })
        .unwrap();
        assert_eq!(
            sync.platform().replaced(),
            vec![ResolvedUrl::normalize("/a"), ResolvedUrl::normalize("/b")]
        );
    }

    #[test]
    fn platform_errors_propagate() {
        let sync = sync_at("/");
        let err = sync
            .on_push(&RouteDescriptor::with_url("//other.example/"), None)
            .unwrap_err();
        assert!(matches!(err, HistoryError::CrossOrigin(_)));
    }

    #[test]
    fn works_as_trait_object_over_borrowed_platform() {
        let history = MemoryHistory::new("http://localhost/").unwrap();
        {
            let sync = BrowserUrlSynchronizer::new(&history);
            let observer: &dyn NavigatorObserver = &sync;
            observer
                .did_push(&RouteDescriptor::with_url("profile/42"), None)
                .unwrap();
            observer.did_pop(&RouteDescriptor::default(), None).unwrap();
        }
        assert_eq!(
            history.replaced(),
            vec![ResolvedUrl::normalize("/profile/42")]
        );
    }

    #[test]
    fn default_platform_synchronizer_is_silent_off_web() {
        let sync = BrowserUrlSynchronizer::new(NoopHistory);
        assert_eq!(sync.resolve(&RouteDescriptor::default()), "/");
        assert!(sync.on_push(&RouteDescriptor::with_url("a"), None).is_ok());
    }
}
