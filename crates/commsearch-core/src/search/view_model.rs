//! View-model for the search-results page.

use std::sync::LazyLock;

use commsearch_api::{Credential, Message, Result};
use tracing::debug;
use url::Url;

use super::pagination::{paginate, Page};
use crate::api::MessageApi;

/// Fixed number of results per page.
pub const MESSAGES_PER_PAGE: usize = 10;

/// Dummy base for building route hrefs; only the path and query are used.
static ROUTE_BASE: LazyLock<Url> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // the literal is a valid URL
    Url::parse("http://localhost/").expect("valid literal URL")
});

/// State behind the search-results listing page.
///
/// Owns the active query, the full result list as returned by the backend
/// (order preserved, not deduplicated), and the 1-based current page. The
/// result list lives only as long as the view; a new navigation replaces it
/// wholesale.
#[derive(Debug, Clone)]
pub struct SearchResults {
    query: String,
    results: Vec<Message>,
    /// 1-based. Not validated against the page count: selecting a page past
    /// the end renders an empty list (kept as-is pending product intent).
    current_page: usize,
}

impl Default for SearchResults {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            current_page: 1,
        }
    }
}

impl SearchResults {
    /// Creates an empty view-model showing page 1 of no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads search results for `query`, replacing any previous state and
    /// resetting to page 1.
    ///
    /// An empty query is forwarded as-is; the backend decides its semantics.
    ///
    /// # Errors
    ///
    /// Propagates the backend error unchanged (the page load fails; nothing
    /// is recovered locally). Prior state is left untouched on failure.
    pub async fn load<A: MessageApi>(
        &mut self,
        api: &A,
        credential: &Credential,
        query: impl Into<String>,
    ) -> Result<()> {
        let query = query.into();
        let results = api.search(credential, &query).await?;
        debug!(count = results.len(), "search results loaded");

        self.query = query;
        self.results = results;
        self.current_page = 1;
        Ok(())
    }

    /// Selects a page. 1-based, not validated against the page count.
    pub const fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// The currently selected page number.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// The active query, verbatim.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active query HTML-escaped for echoing back into markup.
    ///
    /// The original page rendered the raw query back into the document; this
    /// is the encoded replacement for that defect.
    #[must_use]
    pub fn query_echo(&self) -> String {
        html_escape::encode_text(&self.query).into_owned()
    }

    /// Total number of results across all pages.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// The visible slice and derived display values for the current page.
    #[must_use]
    pub fn page(&self) -> Page<'_, Message> {
        paginate(&self.results, self.current_page, MESSAGES_PER_PAGE)
    }

    /// Href of the detail view for one result: `/search/results/{id}?q={query}`,
    /// with both the id segment and the query percent-encoded.
    #[must_use]
    pub fn detail_href(&self, message: &Message) -> String {
        let mut url = ROUTE_BASE.clone();
        // Cannot fail: the base is hierarchical.
        if let Ok(mut parts) = url.path_segments_mut() {
            parts
                .pop_if_empty()
                .extend(["search", "results", &message.id]);
        }
        url.query_pairs_mut().append_pair("q", &self.query);
        match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commsearch_api::Error;

    struct FakeApi {
        results: Vec<Message>,
        fail: bool,
    }

    impl MessageApi for FakeApi {
        async fn search(&self, _credential: &Credential, _query: &str) -> Result<Vec<Message>> {
            if self.fail {
                return Err(Error::Status {
                    status: 400,
                    detail: "Please provide a search query".to_string(),
                });
            }
            Ok(self.results.clone())
        }

        async fn fetch_message(&self, _credential: &Credential, _id: &str) -> Result<Message> {
            Err(Error::NotFound)
        }

        async fn update_status(
            &self,
            _credential: &Credential,
            _id: &str,
            _status: &str,
        ) -> Result<()> {
            Ok(())
        }
    }

    fn message(id: usize) -> Message {
        Message {
            id: id.to_string(),
            subject: format!("subject {id}"),
            from_email: "sender@corp.example".to_string(),
            to_email: "reviewer@corp.example".to_string(),
            content: format!("body {id}"),
            status: None,
            created_at: 1_700_000_000 + i64::try_from(id).unwrap_or(0),
        }
    }

    fn credential() -> Credential {
        Credential::new("test-session")
    }

    #[tokio::test]
    async fn load_stores_results_and_resets_the_page() {
        let api = FakeApi {
            results: (0..25).map(message).collect(),
            fail: false,
        };
        let mut view = SearchResults::new();
        view.set_page(3);

        view.load(&api, &credential(), "wire").await.unwrap();

        assert_eq!(view.query(), "wire");
        assert_eq!(view.result_count(), 25);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.page().page_count, 3);
        assert_eq!(view.page().visible.len(), 10);
    }

    #[tokio::test]
    async fn failed_load_leaves_prior_state_untouched() {
        let api = FakeApi {
            results: (0..5).map(message).collect(),
            fail: false,
        };
        let mut view = SearchResults::new();
        view.load(&api, &credential(), "wire").await.unwrap();

        let failing = FakeApi {
            results: Vec::new(),
            fail: true,
        };
        let err = view.load(&failing, &credential(), "").await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 400, .. }));
        assert_eq!(view.query(), "wire");
        assert_eq!(view.result_count(), 5);
    }

    #[tokio::test]
    async fn page_past_the_end_shows_nothing() {
        let api = FakeApi {
            results: (0..25).map(message).collect(),
            fail: false,
        };
        let mut view = SearchResults::new();
        view.load(&api, &credential(), "wire").await.unwrap();

        view.set_page(9);
        assert_eq!(view.current_page(), 9);
        assert!(view.page().visible.is_empty());
        assert_eq!(view.page().page_count, 3);
    }

    #[tokio::test]
    async fn query_echo_is_html_escaped() {
        let api = FakeApi {
            results: Vec::new(),
            fail: false,
        };
        let mut view = SearchResults::new();
        view.load(&api, &credential(), "<script>alert(1)</script>")
            .await
            .unwrap();

        assert_eq!(view.query(), "<script>alert(1)</script>");
        assert_eq!(
            view.query_echo(),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[tokio::test]
    async fn detail_href_encodes_id_and_query() {
        let api = FakeApi {
            results: vec![message(42)],
            fail: false,
        };
        let mut view = SearchResults::new();
        view.load(&api, &credential(), "q&a report").await.unwrap();

        let first = view.page().visible[0].clone();
        let href = view.detail_href(&first);
        assert_eq!(href, "/search/results/42?q=q%26a+report");
    }
}
