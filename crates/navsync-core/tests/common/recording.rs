//! Platform double that records primitive calls and serves a fixed path.

use navsync_core::{HistoryError, ResolvedUrl, UrlPlatform};
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct RecordingPlatform {
    pub path: RefCell<String>,
    pub calls: RefCell<Vec<String>>,
    pub path_reads: Cell<usize>,
}

impl RecordingPlatform {
    pub fn at(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl UrlPlatform for RecordingPlatform {
    fn current_path(&self) -> String {
        self.path_reads.set(self.path_reads.get() + 1);
        self.path.borrow().clone()
    }

    fn replace_browser_url(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        self.calls.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn replace_location(&self, _url: &ResolvedUrl) -> Result<(), HistoryError> {
        panic!("synchronizer must never reload the page");
    }
}
