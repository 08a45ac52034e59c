// Jira REST (v2) implementation of the worklog remote.
//
// Responsibilities
// - Page through an issue's worklogs and flatten the author into "displayName <email>".
// - Post new worklogs with `started` as `yyyy-MM-ddTHH:mm:ss.SSS±hhmm`, the only shape Jira accepts.
// - Read the issue summary field.
//
// Boundaries
// - Basic auth with user and API token. Transport timeouts are the client's.

use crate::modules::worklog_sync::core::ports::WorklogRemote;
use crate::modules::worklog_sync::core::remote_worklog::{RawWorklog, WorklogSubmission};
use crate::shared::core::config::JiraSettings;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PAGE_SIZE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorklogPage {
    #[serde(default)]
    start_at: u32,
    #[serde(default)]
    total: u32,
    #[serde(default)]
    worklogs: Vec<JiraWorklog>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraWorklog {
    id: String,
    author: Option<JiraUser>,
    started: String,
    #[serde(default)]
    time_spent_seconds: i64,
    #[serde(default)]
    time_spent: String,
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraUser {
    display_name: Option<String>,
    email_address: Option<String>,
    name: Option<String>,
}

impl JiraUser {
    fn representation(&self) -> Option<String> {
        let display = self.display_name.as_deref().or(self.name.as_deref());
        match (display, self.email_address.as_deref()) {
            (Some(display), Some(email)) => Some(format!("{display} <{email}>")),
            (Some(display), None) => Some(display.to_string()),
            (None, Some(email)) => Some(email.to_string()),
            (None, None) => None,
        }
    }
}

impl From<JiraWorklog> for RawWorklog {
    fn from(w: JiraWorklog) -> Self {
        Self {
            author: w.author.as_ref().and_then(JiraUser::representation),
            id: w.id,
            started: w.started,
            time_spent_seconds: w.time_spent_seconds,
            time_spent: w.time_spent,
            comment: w.comment,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewWorklog<'a> {
    time_spent_seconds: i64,
    started: String,
    comment: &'a str,
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    summary: String,
}

pub struct JiraRestClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
    token: String,
}

impl JiraRestClient {
    pub fn new(settings: &JiraSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            user: settings.user.clone(),
            token: settings.token.clone(),
        })
    }

    fn issue_url(&self, ticket_id: &str) -> String {
        format!("{}/rest/api/2/issue/{ticket_id}", self.base_url)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .basic_auth(&self.user, Some(&self.token))
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

async fn ensure_success(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    anyhow::bail!("Jira returned {status}: {}", body.trim())
}

#[async_trait::async_trait]
impl WorklogRemote for JiraRestClient {
    #[tracing::instrument(skip(self))]
    async fn list_worklogs(&self, ticket_id: &str) -> anyhow::Result<Vec<RawWorklog>> {
        let url = format!("{}/worklog", self.issue_url(ticket_id));
        let mut worklogs = Vec::new();
        let mut start_at = 0u32;
        loop {
            let response = self
                .get(&url)
                .query(&[("startAt", start_at), ("maxResults", PAGE_SIZE)])
                .send()
                .await
                .with_context(|| format!("listing worklogs of {ticket_id}"))?;
            let page: WorklogPage = ensure_success(response)
                .await?
                .json()
                .await
                .with_context(|| format!("decoding worklogs of {ticket_id}"))?;

            let fetched = page.worklogs.len() as u32;
            worklogs.extend(page.worklogs.into_iter().map(RawWorklog::from));
            start_at = page.start_at + fetched;
            if fetched == 0 || start_at >= page.total {
                break;
            }
        }
        tracing::debug!(count = worklogs.len(), "fetched worklogs");
        Ok(worklogs)
    }

    #[tracing::instrument(skip(self, submission), fields(ticket = %submission.ticket_id))]
    async fn add_worklog(&self, submission: &WorklogSubmission) -> anyhow::Result<()> {
        let body = NewWorklog {
            time_spent_seconds: submission.time_spent_seconds,
            started: submission.started.format(STARTED_FORMAT).to_string(),
            comment: &submission.comment,
        };
        let response = self
            .http
            .post(format!("{}/worklog", self.issue_url(&submission.ticket_id)))
            .basic_auth(&self.user, Some(&self.token))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("adding worklog to {}", submission.ticket_id))?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn issue_summary(&self, ticket_id: &str) -> anyhow::Result<String> {
        let response = self
            .get(&self.issue_url(ticket_id))
            .query(&[("fields", "summary")])
            .send()
            .await
            .with_context(|| format!("loading issue {ticket_id}"))?;
        let issue: IssueResponse = ensure_success(response)
            .await?
            .json()
            .await
            .with_context(|| format!("decoding issue {ticket_id}"))?;
        Ok(issue.fields.summary)
    }
}
