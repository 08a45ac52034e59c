use crate::modules::worklog_sync::core::ports::IntervalExport;
use crate::modules::worklog_sync::core::tracked_interval::RawIntervalRecord;
use tokio::sync::RwLock;

/// Interval export backed by a fixed list of records.
#[derive(Default)]
pub struct InMemoryIntervalExport {
    records: RwLock<Vec<RawIntervalRecord>>,
    is_offline: bool,
}

impl InMemoryIntervalExport {
    pub fn new(records: Vec<RawIntervalRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn push(&self, record: RawIntervalRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait::async_trait]
impl IntervalExport for InMemoryIntervalExport {
    async fn export(&self) -> anyhow::Result<Vec<RawIntervalRecord>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Interval export offline"));
        }

        Ok(self.records.read().await.clone())
    }
}
