//! History primitive for targets without a browser.

use super::UrlPlatform;
use crate::error::HistoryError;
use crate::url_model::ResolvedUrl;

/// Does nothing. There is no session history to rewrite outside a browser.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopHistory;

impl UrlPlatform for NoopHistory {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn replace_browser_url(&self, _url: &ResolvedUrl) -> Result<(), HistoryError> {
        Ok(())
    }

    fn replace_location(&self, _url: &ResolvedUrl) -> Result<(), HistoryError> {
        Ok(())
    }
}
