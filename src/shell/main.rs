use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use worklog_sync::modules::worklog_sync::adapters::outbound::in_memory_switch_log::InMemorySwitchLog;
use worklog_sync::modules::worklog_sync::adapters::outbound::jira_rest::JiraRestClient;
use worklog_sync::modules::worklog_sync::adapters::outbound::timewarrior_cli::TimewarriorCli;
use worklog_sync::modules::worklog_sync::core::identity::SubstringIdentityMatcher;
use worklog_sync::shared::core::clock::SystemClock;
use worklog_sync::shared::core::config::Config;
use worklog_sync::shell::http::router;
use worklog_sync::shell::state::{AppState, Ports};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // Switches are not persisted; notes only come from switches recorded while running.
    let ports = Ports {
        export: Arc::new(TimewarriorCli::new(config.timewarrior_bin.clone())),
        notes: Arc::new(InMemorySwitchLog::default()),
        remote: Arc::new(JiraRestClient::new(&config.jira)?),
        identity: Arc::new(SubstringIdentityMatcher::new(&config.identity)),
        clock: Arc::new(SystemClock),
    };
    let app = router(AppState::wire(ports, config.policy));

    tracing::info!("REST endpoints: http://{}/timesync", config.http_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.http_addr);
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
