// In memory log of task switches, the source of free-text notes.
//
// Responsibilities
// - Find the first switch to a ticket recorded within a window around an instant.
// - Skip switches whose note is blank.

use crate::modules::worklog_sync::core::ports::NoteLookup;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchRecord {
    pub from_task: Option<String>,
    pub to_task: String,
    pub timestamp: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Default)]
pub struct InMemorySwitchLog {
    switches: RwLock<Vec<SwitchRecord>>,
    is_offline: bool,
}

impl InMemorySwitchLog {
    pub fn new(switches: Vec<SwitchRecord>) -> Self {
        Self {
            switches: RwLock::new(switches),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn record(&self, switch: SwitchRecord) {
        self.switches.write().await.push(switch);
    }
}

#[async_trait::async_trait]
impl NoteLookup for InMemorySwitchLog {
    async fn find_note(
        &self,
        ticket: &str,
        around: DateTime<Utc>,
        window: TimeDelta,
    ) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Switch log offline"));
        }

        let guard = self.switches.read().await;
        let note = guard
            .iter()
            .filter(|s| s.to_task == ticket)
            .filter(|s| (s.timestamp - around).abs() <= window)
            .find_map(|s| {
                s.note
                    .as_deref()
                    .map(str::trim)
                    .filter(|note| !note.is_empty())
                    .map(str::to_string)
            });
        Ok(note)
    }
}
