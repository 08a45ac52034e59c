// Best-effort join of an interval with the note recorded when work switched to its ticket.
//
// Responsibilities
// - Ask the note log for a switch to the interval's ticket near the interval's start.
// - Leave the interval untouched when nothing matches or the lookup fails.

use crate::modules::worklog_sync::core::errors::ReconciliationError;
use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::modules::worklog_sync::core::ports::NoteLookup;
use crate::modules::worklog_sync::core::tracked_interval::TrackedInterval;
use chrono::Utc;
use std::sync::Arc;

pub struct NoteAnnotator {
    notes: Arc<dyn NoteLookup>,
    policy: SyncPolicy,
}

impl NoteAnnotator {
    pub fn new(notes: Arc<dyn NoteLookup>, policy: SyncPolicy) -> Self {
        Self { notes, policy }
    }

    pub async fn lookup(
        &self,
        interval: &TrackedInterval,
    ) -> Result<Option<String>, ReconciliationError> {
        self.notes
            .find_note(
                interval.ticket.as_str(),
                interval.start.with_timezone(&Utc),
                self.policy.note_window,
            )
            .await
            .map_err(|e| ReconciliationError::NoteLookup(format!("{e:#}")))
    }

    /// Attach a note if the interval has none yet. Never fails.
    pub async fn annotate(&self, interval: TrackedInterval) -> TrackedInterval {
        if interval.usable_note().is_some() {
            return interval;
        }
        match self.lookup(&interval).await {
            Ok(note) => interval.with_note(note),
            Err(error) => {
                tracing::warn!(ticket = %interval.ticket, %error, "could not look up note");
                interval
            }
        }
    }
}

#[cfg(test)]
mod worklog_sync_note_annotator_tests {
    use super::*;
    use crate::modules::worklog_sync::adapters::outbound::in_memory_switch_log::{
        InMemorySwitchLog, SwitchRecord,
    };
    use crate::tests::fixtures::intervals::TrackedIntervalBuilder;
    use chrono::{DateTime, TimeDelta};
    use rstest::{fixture, rstest};

    fn switch(ticket: &str, at: DateTime<Utc>, note: Option<&str>) -> SwitchRecord {
        SwitchRecord {
            from_task: None,
            to_task: ticket.to_string(),
            timestamp: at,
            note: note.map(str::to_string),
        }
    }

    #[fixture]
    fn interval() -> TrackedInterval {
        TrackedIntervalBuilder::new().build()
    }

    fn annotator(log: InMemorySwitchLog) -> NoteAnnotator {
        NoteAnnotator::new(Arc::new(log), SyncPolicy::default())
    }

    #[rstest]
    #[case(45)]
    #[case(60)]
    #[case(-60)]
    #[tokio::test]
    async fn it_should_attach_a_note_recorded_within_the_window(
        interval: TrackedInterval,
        #[case] offset_seconds: i64,
    ) {
        let at = interval.start.with_timezone(&Utc) + TimeDelta::seconds(offset_seconds);
        let log = InMemorySwitchLog::new(vec![switch("ABC-123", at, Some("pairing on the parser"))]);
        let annotated = annotator(log).annotate(interval).await;
        assert_eq!(annotated.note.as_deref(), Some("pairing on the parser"));
    }

    #[rstest]
    #[case(61)]
    #[case(-61)]
    #[tokio::test]
    async fn it_should_ignore_notes_outside_the_window(
        interval: TrackedInterval,
        #[case] offset_seconds: i64,
    ) {
        let at = interval.start.with_timezone(&Utc) + TimeDelta::seconds(offset_seconds);
        let log = InMemorySwitchLog::new(vec![switch("ABC-123", at, Some("out of range"))]);
        assert_eq!(annotator(log).annotate(interval).await.note, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_ignore_notes_for_other_tickets(interval: TrackedInterval) {
        let at = interval.start.with_timezone(&Utc);
        let log = InMemorySwitchLog::new(vec![switch("OPS-42", at, Some("wrong ticket"))]);
        assert_eq!(annotator(log).annotate(interval).await.note, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_an_existing_note(interval: TrackedInterval) {
        let at = interval.start.with_timezone(&Utc);
        let log = InMemorySwitchLog::new(vec![switch("ABC-123", at, Some("from the log"))]);
        let interval = interval.with_note(Some("typed by hand".to_string()));
        assert_eq!(
            annotator(log).annotate(interval).await.note.as_deref(),
            Some("typed by hand")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_the_interval_alone_when_the_log_is_offline(interval: TrackedInterval) {
        let mut log = InMemorySwitchLog::new(vec![]);
        log.toggle_offline();
        let annotator = annotator(log);
        assert!(matches!(
            annotator.lookup(&interval).await,
            Err(ReconciliationError::NoteLookup(_))
        ));
        assert_eq!(annotator.annotate(interval.clone()).await, interval);
    }
}
