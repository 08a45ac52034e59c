use crate::shell::state::AppState;
use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::worklog_sync::use_cases::sync_batch::inbound::graphql::MutationRoot;
use crate::modules::worklog_sync::use_cases::list_intervals::inbound::graphql::IntervalsQuery;
use crate::modules::worklog_sync::use_cases::summarize_tickets::inbound::graphql::TicketsQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(IntervalsQuery, TicketsQuery);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
