//! In-process session history.
//!
//! Models the browser's history stack closely enough to check what the
//! synchronizer does to it: entries are absolute URLs on one origin, a cursor
//! marks the current entry, pushes drop forward entries, and replaces rewrite
//! the current entry without changing depth. Every primitive call is recorded.

use super::UrlPlatform;
use crate::error::HistoryError;
use crate::url_model::ResolvedUrl;
use std::cell::RefCell;
use url::Url;

/// Session history held in memory. Single-threaded, like the browser's.
#[derive(Debug)]
pub struct MemoryHistory {
    state: RefCell<State>,
}

#[derive(Debug)]
struct State {
    entries: Vec<Url>,
    index: usize,
    replaced: Vec<ResolvedUrl>,
    reloads: Vec<ResolvedUrl>,
}

impl State {
    fn current(&self) -> &Url {
        &self.entries[self.index]
    }

    /// Resolves `target` against the current entry, refusing to leave its origin.
    fn join(&self, target: &str) -> Result<Url, HistoryError> {
        let current = self.current();
        let next = current.join(target).map_err(|e| HistoryError::InvalidUrl {
            url: target.to_string(),
            reason: e.to_string(),
        })?;
        if next.origin() != current.origin() {
            return Err(HistoryError::CrossOrigin(next.to_string()));
        }
        Ok(next)
    }
}

impl MemoryHistory {
    /// Starts a history with a single entry at `start`, which must be an
    /// absolute URL (e.g. `http://localhost/`).
    pub fn new(start: &str) -> Result<Self, HistoryError> {
        let url = Url::parse(start).map_err(|e| HistoryError::InvalidUrl {
            url: start.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(HistoryError::InvalidUrl {
                url: start.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        Ok(Self {
            state: RefCell::new(State {
                entries: vec![url],
                index: 0,
                replaced: Vec::new(),
                reloads: Vec::new(),
            }),
        })
    }

    /// Host-side push: drops any forward entries and appends `target`.
    pub fn push(&self, target: &str) -> Result<(), HistoryError> {
        let mut state = self.state.borrow_mut();
        let next = state.join(target)?;
        let keep = state.index + 1;
        state.entries.truncate(keep);
        state.entries.push(next);
        state.index = keep;
        Ok(())
    }

    /// User-side back navigation. Returns `false` when already at the first entry.
    pub fn back(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.index == 0 {
            return false;
        }
        state.index -= 1;
        true
    }

    /// User-side forward navigation. Returns `false` when already at the last entry.
    pub fn forward(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.index + 1 >= state.entries.len() {
            return false;
        }
        state.index += 1;
        true
    }

    /// Absolute URL of the current entry.
    pub fn current_url(&self) -> String {
        self.state.borrow().current().to_string()
    }

    /// Number of entries in the stack.
    pub fn depth(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Zero-based position of the current entry.
    pub fn index(&self) -> usize {
        self.state.borrow().index
    }

    /// Every URL passed to `replace_browser_url`, in call order.
    pub fn replaced(&self) -> Vec<ResolvedUrl> {
        self.state.borrow().replaced.clone()
    }

    /// Every URL passed to `replace_location`, in call order.
    pub fn reloads(&self) -> Vec<ResolvedUrl> {
        self.state.borrow().reloads.clone()
    }
}

impl UrlPlatform for MemoryHistory {
    fn current_path(&self) -> String {
        self.state.borrow().current().path().to_string()
    }

    fn replace_browser_url(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        let mut state = self.state.borrow_mut();
        let next = state.join(url.as_str())?;
        let index = state.index;
        state.entries[index] = next;
        state.replaced.push(url.clone());
        Ok(())
    }

    fn replace_location(&self, url: &ResolvedUrl) -> Result<(), HistoryError> {
        let mut state = self.state.borrow_mut();
        let next = state.join(url.as_str())?;
        let index = state.index;
        state.entries[index] = next;
        state.reloads.push(url.clone());
        Ok(())
    }
}
