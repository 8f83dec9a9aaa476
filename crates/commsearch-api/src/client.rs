//! HTTP client for the message backend.

use reqwest::header::COOKIE;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::credential::Credential;
use crate::error::{Error, ErrorBody, Result};
use crate::model::{ListOptions, Message, UpdateStatusRequest};

/// Base address of a message backend.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base_url: Url,
}

impl Endpoint {
    /// Creates an endpoint from a base URL string.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot carry path segments.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Endpoint of the local development backend.
    #[must_use]
    #[allow(clippy::expect_used)] // the literal is a valid base URL
    pub fn localhost() -> Self {
        Self::new("http://localhost:8080/").expect("valid literal URL")
    }

    /// Builds a URL under the base with the given path segments.
    ///
    /// Segments are percent-encoded, so untrusted ids cannot alter the path.
    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Cannot fail: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Client for the message backend.
///
/// Cheap to clone; the underlying connection pool is shared. Every call
/// forwards the given [`Credential`] as the session cookie and maps
/// non-success responses into [`Error`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: Endpoint,
    http_client: Client,
}

impl ApiClient {
    /// Creates a client against the given endpoint.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            http_client: Client::new(),
        }
    }

    /// Runs a full-text search over message subjects and bodies.
    ///
    /// An empty query is forwarded as-is; the backend decides its semantics
    /// (it currently rejects it with HTTP 400).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any non-success response.
    pub async fn search(&self, credential: &Credential, query: &str) -> Result<Vec<Message>> {
        let mut url = self.endpoint.url_for(&["search"]);
        url.query_pairs_mut().append_pair("q", query);
        debug!(query, "searching messages");

        let response = self
            .http_client
            .get(url)
            .header(COOKIE, credential.cookie_header())
            .send()
            .await?;

        Self::check_status(response).await?.json().await.map_err(Into::into)
    }

    /// Fetches one message by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the id does not exist, or an error on
    /// transport failure or any other non-success response.
    pub async fn fetch_message(&self, credential: &Credential, id: &str) -> Result<Message> {
        let url = self.endpoint.url_for(&["messages", id]);
        debug!(message_id = id, "fetching message");

        let response = self
            .http_client
            .get(url)
            .header(COOKIE, credential.cookie_header())
            .send()
            .await?;

        Self::check_status(response).await?.json().await.map_err(Into::into)
    }

    /// Lists messages ordered by creation time, one backend page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any non-success response
    /// (the backend answers 400 for an out-of-range page).
    pub async fn list_messages(
        &self,
        credential: &Credential,
        options: &ListOptions,
    ) -> Result<Vec<Message>> {
        let mut url = self.endpoint.url_for(&["messages"]);
        apply_list_options(&mut url, options);
        debug!(page = options.page, page_size = options.page_size, "listing messages");

        let response = self
            .http_client
            .get(url)
            .header(COOKIE, credential.cookie_header())
            .send()
            .await?;

        Self::check_status(response).await?.json().await.map_err(Into::into)
    }

    /// Sets the review status of a message.
    ///
    /// The status string is sent verbatim; no response body is consumed.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any non-success response
    /// (the backend rejects unknown status values with HTTP 400).
    pub async fn update_status(
        &self,
        credential: &Credential,
        id: &str,
        status: &str,
    ) -> Result<()> {
        let url = self.endpoint.url_for(&["messages", id]);
        debug!(message_id = id, "updating message status");

        let response = self
            .http_client
            .put(url)
            .header(COOKIE, credential.cookie_header())
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Maps non-success responses into the error taxonomy.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        warn!(status = status.as_u16(), "backend request failed");
        match status {
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            StatusCode::NOT_FOUND => Err(Error::NotFound),
            _ => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .map(|body| body.detail)
                    .unwrap_or_default();
                Err(Error::Status {
                    status: status.as_u16(),
                    detail,
                })
            }
        }
    }
}

/// Appends the listing options as the query parameters the backend expects.
fn apply_list_options(url: &mut Url, options: &ListOptions) {
    url.query_pairs_mut()
        .append_pair("order", options.order.as_str())
        .append_pair("page", &options.page.to_string())
        .append_pair("page_size", &options.page_size.to_string());
}
