//! `navsync replay <script>` – replay a navigation script.

use anyhow::Result;
use std::path::Path;

use crate::config::ReportFormat;
use crate::script::{replay, Script};

pub fn run_replay(path: &Path, base_url: &str, format: ReportFormat) -> Result<()> {
    let script = Script::load(path)?;
    tracing::info!(
        "replaying {} step(s) from {} at {}",
        script.steps.len(),
        path.display(),
        base_url
    );
    let report = replay(&script, base_url)?;

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text => {
            if report.applied.is_empty() {
                println!("No URLs applied.");
            } else {
                println!("{:<6} {:<8} {}", "STEP", "EVENT", "URL");
                for a in &report.applied {
                    println!(
                        "{:<6} {:<8} {}",
                        a.step,
                        format!("{:?}", a.kind).to_lowercase(),
                        a.url
                    );
                }
            }
            println!(
                "final: {} (entry {} of {})",
                report.final_url,
                report.index + 1,
                report.depth
            );
        }
    }
    Ok(())
}
