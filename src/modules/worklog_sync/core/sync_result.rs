// Outcome of synchronizing one interval, and the report for a whole batch.
//
// Notes
// - A duplicate is an expected skip, not a failure of the tool. `success` is false for it, and
//   `status` tells the two apart without reading the message.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Synced,
    Duplicate,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub status: SyncStatus,
    pub message: String,
}

impl SyncOutcome {
    pub fn synced(message: impl Into<String>) -> Self {
        Self {
            status: SyncStatus::Synced,
            message: message.into(),
        }
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self {
            status: SyncStatus::Duplicate,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SyncStatus::Failed,
            message: message.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == SyncStatus::Synced
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    pub ticket: String,
    pub start: DateTime<FixedOffset>,
    #[serde(rename = "duration")]
    pub duration_formatted: String,
    pub success: bool,
    pub status: SyncStatus,
    pub message: String,
    #[serde(rename = "comment")]
    pub comment_used: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

impl SyncSummary {
    pub fn from_results(results: &[SyncResult]) -> Self {
        let success = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            success,
            failed: results.len() - success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncBatchReport {
    pub batch_id: Uuid,
    pub results: Vec<SyncResult>,
    pub summary: SyncSummary,
}

impl SyncBatchReport {
    pub fn new(batch_id: Uuid, results: Vec<SyncResult>) -> Self {
        let summary = SyncSummary::from_results(&results);
        Self {
            batch_id,
            results,
            summary,
        }
    }
}
