//! URL resolution for navigation events.
//!
//! Picks the URL a route should be displayed under (its explicit URL, or the
//! path the browser already shows) and normalizes it to start with `/`.

mod normalize;
mod resolve;

pub use normalize::ResolvedUrl;
pub use resolve::resolve_url;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteUrlHint;

    #[test]
    fn explicit_url_wins_over_current_path() {
        let url = resolve_url(&RouteUrlHint::from("settings"), || "/elsewhere".to_string());
        assert_eq!(url, "/settings");
    }

    #[test]
    fn no_hint_uses_current_path() {
        let url = resolve_url(&RouteUrlHint::NoHint, || "/home".to_string());
        assert_eq!(url, "/home");
        let url = resolve_url(&RouteUrlHint::NoHint, || "home".to_string());
        assert_eq!(url, "/home");
    }

    #[test]
    fn current_path_not_read_for_explicit_url() {
        let url = resolve_url(&RouteUrlHint::from("/a"), || {
            panic!("current path must not be read")
        });
        assert_eq!(url, "/a");
    }
}
