//! YouTrack issue tracker implementation

use super::IssueTracker;
use crate::error::{Error, Result};
use crate::types::Issue;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Fields requested for every issue
const ISSUE_FIELDS: &str = "idReadable,summary,customFields(name,value(name))";

/// Custom field holding the workflow state
const STATE_FIELD: &str = "State";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Issue record as returned by `/api/issues`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIssue {
    id_readable: Option<String>,
    summary: Option<String>,
    custom_fields: Option<Vec<RawCustomField>>,
}

#[derive(Deserialize)]
struct RawCustomField {
    name: Option<String>,
    // Shape depends on the field type; only the State field is inspected
    value: Option<Value>,
}

impl RawIssue {
    fn into_issue(self) -> Result<Issue> {
        let id = self.id_readable.ok_or(Error::MissingField("idReadable"))?;
        let title = self.summary.ok_or(Error::MissingField("summary"))?;

        let state = self
            .custom_fields
            .unwrap_or_default()
            .into_iter()
            .find(|field| field.name.as_deref() == Some(STATE_FIELD))
            .and_then(|field| field.value)
            .and_then(|value| value.get("name").and_then(Value::as_str).map(String::from));

        Ok(Issue { id, title, state })
    }
}

/// Convert an `/api/issues` response body into issues
///
/// Fails on the first record lacking `idReadable` or `summary`; no partial
/// list is returned.
pub fn parse_issues(body: &str) -> Result<Vec<Issue>> {
    let raw: Vec<RawIssue> = serde_json::from_str(body)?;
    raw.into_iter().map(RawIssue::into_issue).collect()
}

/// Render the search query for a set of issue IDs
///
/// `["A-1", "A-2"]` becomes `issue id: A-1 OR issue id: A-2`.
pub fn build_query(issue_ids: &[String]) -> String {
    issue_ids
        .iter()
        .map(|id| format!("issue id: {id}"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// YouTrack service using reqwest
pub struct YouTrackService {
    client: Client,
    token: String,
    base_url: String,
}

impl YouTrackService {
    /// Create a new YouTrack service
    ///
    /// `base_url` is the instance root, e.g. `https://company.youtrack.cloud`.
    pub fn new(base_url: &str, token: String) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid tracker URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "tracker URL must use http or https: {base_url}"
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("issue-scan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

#[async_trait]
impl IssueTracker for YouTrackService {
    async fn get_issues(&self, issue_ids: &[String]) -> Result<Vec<Issue>> {
        if issue_ids.is_empty() {
            debug!("no issue ids requested, skipping lookup");
            return Ok(Vec::new());
        }

        debug!(count = issue_ids.len(), "fetching issues");
        let query = build_query(issue_ids);

        let response = self
            .client
            .get(self.api_url("/issues"))
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("fields", ISSUE_FIELDS), ("query", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "issue lookup failed");
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let issues = parse_issues(&body)?;
        debug!(count = issues.len(), "fetched issues");
        Ok(issues)
    }

    fn issue_url(&self, issue_id: &str) -> String {
        format!("{}/issue/{issue_id}", self.base_url)
    }
}
