//! Navigation scripts: a TOML list of router events replayed against an
//! in-memory session history.
//!
//! ```toml
//! start = "/"
//!
//! [[step]]
//! kind = "push"
//! location = "/profile"      # what the router pushed before notifying
//! arguments = "profile/42"   # any TOML value; only strings are URLs
//! name = "profile"
//!
//! [[step]]
//! kind = "pop"               # browser goes back one entry first
//! ```

use anyhow::{Context, Result};
use navsync_core::{BrowserUrlSynchronizer, MemoryHistory, RouteDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Push,
    Replace,
    Pop,
}

/// One router notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    /// Arguments of the pushed route, or of the new route for `replace`.
    #[serde(default)]
    pub arguments: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    /// `replace` only: the new route is absent.
    #[serde(default)]
    pub absent: bool,
    /// `replace` only: the old route, if any.
    #[serde(default)]
    pub old_arguments: Option<Value>,
    #[serde(default)]
    pub old_name: Option<String>,
    /// Path the router pushed onto history before notifying observers.
    /// Not allowed on `pop`, where the browser moves back on its own.
    #[serde(default)]
    pub location: Option<String>,
}

impl Step {
    fn route(&self) -> RouteDescriptor {
        RouteDescriptor::from_parts(self.name.clone(), self.arguments.as_ref())
    }

    fn old_route(&self) -> Option<RouteDescriptor> {
        if self.old_arguments.is_none() && self.old_name.is_none() {
            return None;
        }
        Some(RouteDescriptor::from_parts(
            self.old_name.clone(),
            self.old_arguments.as_ref(),
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Initial path, relative to the base URL.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read script: {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("parse script: {}", path.display()))
    }
}

/// A URL the synchronizer wrote during one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedUrl {
    pub step: usize,
    pub kind: StepKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub applied: Vec<AppliedUrl>,
    pub final_url: String,
    pub depth: usize,
    pub index: usize,
}

/// Replays `script` from `base_url` and reports every URL written.
pub fn replay(script: &Script, base_url: &str) -> Result<ReplayReport> {
    let history = MemoryHistory::new(base_url)
        .with_context(|| format!("invalid base url: {base_url}"))?;
    if let Some(start) = &script.start {
        history
            .push(start)
            .with_context(|| format!("invalid start path: {start}"))?;
    }
    let sync = BrowserUrlSynchronizer::new(&history);

    let mut applied = Vec::new();
    let mut previous: Option<RouteDescriptor> = None;
    for (i, step) in script.steps.iter().enumerate() {
        let step_no = i + 1;
        if step.kind == StepKind::Pop && step.location.is_some() {
            anyhow::bail!("step {step_no}: pop cannot set a location");
        }
        if let Some(location) = &step.location {
            history
                .push(location)
                .with_context(|| format!("step {step_no}: invalid location {location}"))?;
        }

        let before = history.replaced().len();
        match step.kind {
            StepKind::Push => {
                let route = step.route();
                sync.on_push(&route, previous.as_ref())
                    .with_context(|| format!("step {step_no}: push"))?;
                previous = Some(route);
            }
            StepKind::Replace => {
                let new_route = (!step.absent).then(|| step.route());
                let old_route = step.old_route();
                sync.on_replace(new_route.as_ref(), old_route.as_ref())
                    .with_context(|| format!("step {step_no}: replace"))?;
                if new_route.is_some() {
                    previous = new_route;
                }
            }
            StepKind::Pop => {
                if !history.back() {
                    tracing::warn!("step {}: pop at first history entry", step_no);
                }
                let route = step.route();
                sync.on_pop(&route, previous.as_ref())
                    .with_context(|| format!("step {step_no}: pop"))?;
            }
        }

        for url in history.replaced().into_iter().skip(before) {
            tracing::debug!("step {} ({:?}) applied {}", step_no, step.kind, url);
            applied.push(AppliedUrl {
                step: step_no,
                kind: step.kind,
                url: url.into_string(),
            });
        }
    }

    Ok(ReplayReport {
        applied,
        final_url: history.current_url(),
        depth: history.depth(),
        index: history.index(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASE: &str = "http://localhost/";

    fn run(toml: &str) -> ReplayReport {
        replay(&Script::from_toml(toml).unwrap(), BASE).unwrap()
    }

    #[test]
    fn push_string_arguments() {
        let report = run(r#"
            [[step]]
            kind = "push"
            arguments = "profile/42"
        "#);
        assert_eq!(
            report.applied,
            vec![AppliedUrl {
                step: 1,
                kind: StepKind::Push,
                url: "/profile/42".to_string()
            }]
        );
        assert_eq!(report.final_url, "http://localhost/profile/42");
        assert_eq!(report.depth, 1);
    }

    #[test]
    fn push_without_string_arguments_keeps_location() {
        let report = run(r#"
            [[step]]
            kind = "push"
            name = "home"
            location = "/home"

            [[step]]
            kind = "push"
            arguments = 42
            location = "/answers"
        "#);
        let urls: Vec<_> = report.applied.iter().map(|a| a.url.as_str()).collect();
        assert_eq!(urls, vec!["/home", "/answers"]);
        assert_eq!(report.depth, 3);
    }

    #[test]
    fn replace_variants() {
        let report = run(r#"
            [[step]]
            kind = "replace"
            arguments = "a"
            old_arguments = "b"

            [[step]]
            kind = "replace"
            absent = true
            old_arguments = "a"
        "#);
        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.applied[0].url, "/a");
        assert_eq!(report.applied[0].kind, StepKind::Replace);
    }

    #[test]
    fn pop_moves_back_without_writing() {
        let report = run(r#"
            start = "/list"

            [[step]]
            kind = "push"
            arguments = "items/1"
            location = "/items/1"

            [[step]]
            kind = "pop"
            arguments = "items/1"
        "#);
        assert_eq!(report.applied.len(), 1);
        assert_eq!(report.final_url, "http://localhost/list");
        assert_eq!(report.depth, 3);
        assert_eq!(report.index, 1);
    }

    #[test]
    fn pop_with_location_rejected() {
        let script = Script::from_toml(
            r#"
            start = "/list"

            [[step]]
            kind = "push"
            arguments = "a"
            location = "/a"

            [[step]]
            kind = "pop"
            location = "/b"
        "#,
        )
        .unwrap();
        let err = replay(&script, BASE).unwrap_err();
        assert!(format!("{err:#}").contains("step 2: pop cannot set a location"));
    }

    #[test]
    fn cross_origin_argument_fails_with_step_context() {
        let script = Script::from_toml(
            r#"
            [[step]]
            kind = "push"
            arguments = "//other.example/x"
        "#,
        )
        .unwrap();
        let err = replay(&script, BASE).unwrap_err();
        assert!(format!("{err:#}").contains("step 1: push"));
    }

    #[test]
    fn unknown_kind_rejected() {
        assert!(Script::from_toml("[[step]]\nkind = \"jump\"\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"[[step]]\nkind = \"push\"\narguments = \"settings\"\n").unwrap();
        f.flush().unwrap();
        let script = Script::load(f.path()).unwrap();
        assert_eq!(script.steps.len(), 1);
        assert_eq!(replay(&script, BASE).unwrap().applied[0].url, "/settings");
    }

    #[test]
    fn empty_script_reports_start() {
        let report = run("");
        assert!(report.applied.is_empty());
        assert_eq!(report.final_url, BASE);
        assert_eq!(report.depth, 1);
    }
}
