//! Tableau HTTP client for REST API interactions

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TableauError};
use crate::tableau::session::{PersonalAccessToken, Session};
use crate::tableau::traits::ListResponse;

/// Tableau REST API client owning one authenticated session
pub struct TableauClient {
    client: Client,
    base_url: String,
    api_version: String,
    site_content_url: String,
    pub(crate) credentials: PersonalAccessToken,
    pub(crate) session: Session,
}

impl TableauClient {
    /// Create a new signed-out client
    pub fn new(
        base_url: &str,
        api_version: &str,
        site_content_url: &str,
        credentials: PersonalAccessToken,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
            site_content_url: site_content_url.to_string(),
            credentials,
            session: Session::new(),
        }
    }

    /// Server URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn site_content_url(&self) -> &str {
        &self.site_content_url
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build `<base>/api/<version><path>`
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}{}", self.base_url, self.api_version, path)
    }

    /// Build a URL below `/sites/{site_id}/` with an encoded query string
    pub(crate) fn site_url(&self, site_id: &str, resource: &str, query: &[(&str, &str)]) -> String {
        let url = self.api_url(&format!("/{}/{}/{}", api::SITES, site_id, resource));
        if query.is_empty() {
            return url;
        }

        let query_string = query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", url, query_string)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header("Accept", "application/json")
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a GET request builder carrying the session token
    fn authenticated_get(&self, url: &str, token: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
            .header(api::AUTH_HEADER, token)
    }

    /// GET a site resource and decode the JSON body
    ///
    /// Fails with `IllegalState` before any request when there is no session,
    /// and with `ApiRequest` for every status other than 200.
    pub(crate) async fn get_json<R>(&self, resource: &str, query: &[(&str, &str)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let (token, site_id) = self.session.active()?;
        let url = self.site_url(site_id, resource, query);
        debug!("GET {}", url);

        let response = self.authenticated_get(&url, token).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(TableauError::ApiRequest {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch a single-page list endpoint
    ///
    /// Only the first page the server returns is used. When the server reports
    /// more items than it sent, a warning is logged.
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Project, Datasource)
    /// * `R` - The envelope type that implements ListResponse<T>
    pub async fn fetch_list<T, R>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
        context: &str,
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned + ListResponse<T>,
    {
        let response: R = self.get_json(resource, query).await?;
        let total = response.pagination().and_then(|p| p.total_available);
        let items = response.into_items();

        if is_partial_page(total, items.len()) {
            warn!(
                "Showing first {} of {} {} (only one page is fetched)",
                items.len(),
                total.unwrap_or_default(),
                context
            );
        }

        debug!("Fetched {} {}", items.len(), context);
        Ok(items)
    }
}

/// True when the server reports more items than the single page returned
fn is_partial_page(total_available: Option<u64>, returned: usize) -> bool {
    total_available.is_some_and(|total| total > returned as u64)
}

#[cfg(test)]
impl TableauClient {
    /// Create a signed-out test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            base_url,
            api::VERSION,
            "my-site",
            PersonalAccessToken::new("pat-name", "pat-secret"),
        )
    }

    /// Create a test client with an already active session
    pub fn signed_in_test_client(base_url: &str) -> Self {
        let mut client = Self::test_client(base_url);
        client
            .session
            .start("test-token".to_string(), "site-1".to_string());
        client
    }
}
