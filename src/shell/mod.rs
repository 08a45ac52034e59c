// Composition root for the worklog_sync bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the Timewarrior, switch log and Jira adapters.
// - Wire them into the use case handlers and expose HTTP and GraphQL routes.

pub mod graphql;
pub mod http;
pub mod state;
