// Interval export read from the Timewarrior command line (`timew export`).
//
// Responsibilities
// - Run the binary and decode its JSON array output.
// - Drop records that do not decode, one by one, instead of failing the whole export.
//
// Boundaries
// - A missing binary or a non-zero exit is an error. Blank output is an empty export.

use crate::modules::worklog_sync::core::ports::IntervalExport;
use crate::modules::worklog_sync::core::tracked_interval::RawIntervalRecord;
use anyhow::Context;
use tokio::process::Command;

pub struct TimewarriorCli {
    bin: String,
}

impl TimewarriorCli {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

/// Decode `timew export` output, skipping records that are not interval objects.
pub fn decode_export(output: &str) -> anyhow::Result<Vec<RawIntervalRecord>> {
    if output.trim().is_empty() {
        return Ok(Vec::new());
    }
    let values: Vec<serde_json::Value> =
        serde_json::from_str(output).context("export is not a JSON array")?;
    let records = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            serde_json::from_value::<RawIntervalRecord>(value)
                .inspect_err(|error| tracing::debug!(index, %error, "skipping export record"))
                .ok()
        })
        .collect();
    Ok(records)
}

#[async_trait::async_trait]
impl IntervalExport for TimewarriorCli {
    #[tracing::instrument(skip(self), fields(bin = %self.bin))]
    async fn export(&self) -> anyhow::Result<Vec<RawIntervalRecord>> {
        let output = Command::new(&self.bin)
            .arg("export")
            .output()
            .await
            .with_context(|| format!("running {} export", self.bin))?;
        if !output.status.success() {
            anyhow::bail!(
                "{} export exited with {}: {}",
                self.bin,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        let stdout = String::from_utf8(output.stdout).context("export is not UTF-8")?;
        decode_export(&stdout)
    }
}
