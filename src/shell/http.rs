use axum::{
    Extension, Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::worklog_sync::use_cases::list_intervals::inbound::http as list_http;
use crate::modules::worklog_sync::use_cases::summarize_tickets::inbound::http as tickets_http;
use crate::modules::worklog_sync::use_cases::sync_batch::inbound::http as sync_http;
use crate::shell::graphql::{self, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/timesync/intervals", get(list_http::handle))
        .route("/timesync/sync", post(sync_http::handle))
        .route("/timesync/tickets", get(tickets_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
