use crate::modules::worklog_sync::adapters::outbound::in_memory_interval_export::InMemoryIntervalExport;
use crate::modules::worklog_sync::adapters::outbound::in_memory_switch_log::InMemorySwitchLog;
use crate::modules::worklog_sync::adapters::outbound::in_memory_worklog_remote::InMemoryWorklogRemote;
use crate::modules::worklog_sync::core::identity::SubstringIdentityMatcher;
use crate::modules::worklog_sync::core::policy::SyncPolicy;
use crate::shell::state::{AppState, Ports};
use crate::tests::fixtures::clock::eastern_summer_clock;
use crate::tests::fixtures::records::load_export_fixture;
use crate::tests::fixtures::worklogs::AUTHOR;
use std::sync::Arc;

/// App state over the fixture export, an empty switch log and the given remote.
pub fn make_test_state(remote: Arc<InMemoryWorklogRemote>) -> AppState {
    AppState::wire(
        Ports {
            export: Arc::new(InMemoryIntervalExport::new(load_export_fixture())),
            notes: Arc::new(InMemorySwitchLog::new(vec![])),
            remote,
            identity: Arc::new(SubstringIdentityMatcher::new(AUTHOR)),
            clock: Arc::new(eastern_summer_clock()),
        },
        SyncPolicy::default(),
    )
}
