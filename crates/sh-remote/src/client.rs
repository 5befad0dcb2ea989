//! HTTP client for the remote store's REST surface.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sh_core::CoreError;
use thiserror::Error;
use tracing::debug;

use crate::query::Query;

/// Remote collaborator error types.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session file error: {0}")]
    SessionFile(#[from] std::io::Error),
}

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

impl From<RemoteError> for CoreError {
    fn from(err: RemoteError) -> Self {
        CoreError::Remote(err.to_string())
    }
}

/// Client for the `/rest/v1` table API.
///
/// Every request carries the store access key; when a bearer token is
/// supplied it authenticates the request as that user, otherwise the key
/// doubles as the bearer (the collaborator's anonymous role).
#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl RestClient {
    /// Create a client for the given endpoint and access key.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }

    /// The configured endpoint, normalized.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured access key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn table_url(&self, table: &str, query: &Query) -> String {
        format!(
            "{}/rest/v1/{}?{}",
            self.base_url,
            table,
            query.to_query_string()
        )
    }

    fn authed(&self, req: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(token.unwrap_or(&self.api_key))
    }

    /// Fetch rows from a table.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        token: Option<&str>,
    ) -> RemoteResult<Vec<T>> {
        let url = self.table_url(table, query);
        let response = self.authed(self.http.get(&url), token).send().await?;
        let response = check_status(response).await?;
        let rows: Vec<T> = response.json().await?;
        debug!(table, rows = rows.len(), "fetched rows");
        Ok(rows)
    }

    /// Insert one row into a table. The server assigns id and timestamps;
    /// callers re-read the collection instead of merging a response.
    pub async fn insert<T: Serialize>(
        &self,
        table: &str,
        row: &T,
        token: Option<&str>,
    ) -> RemoteResult<()> {
        let url = self.table_url(table, &Query::new());
        let response = self
            .authed(self.http.post(&url), token)
            .json(row)
            .send()
            .await?;
        check_status(response).await?;
        debug!(table, "inserted row");
        Ok(())
    }

    /// Patch the rows matched by the query.
    pub async fn update<T: Serialize>(
        &self,
        table: &str,
        query: &Query,
        patch: &T,
        token: Option<&str>,
    ) -> RemoteResult<()> {
        let url = self.table_url(table, query);
        let response = self
            .authed(self.http.patch(&url), token)
            .json(patch)
            .send()
            .await?;
        check_status(response).await?;
        debug!(table, "updated rows");
        Ok(())
    }

    /// Delete the rows matched by the query.
    pub async fn delete(&self, table: &str, query: &Query, token: Option<&str>) -> RemoteResult<()> {
        let url = self.table_url(table, query);
        let response = self.authed(self.http.delete(&url), token).send().await?;
        check_status(response).await?;
        debug!(table, "deleted rows");
        Ok(())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

pub(crate) async fn check_status(response: reqwest::Response) -> RemoteResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Api { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = RestClient::new("https://example.supabase.co/", "key");
        assert_eq!(client.base_url(), "https://example.supabase.co");
    }

    #[test]
    fn test_table_url() {
        let client = RestClient::new("https://example.supabase.co", "key");
        let url = client.table_url("homeworks", &Query::new().eq("completed", false));
        assert_eq!(
            url,
            "https://example.supabase.co/rest/v1/homeworks?select=*&completed=eq.false"
        );
    }
}
