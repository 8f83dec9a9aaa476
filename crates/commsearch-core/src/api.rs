//! The seam between the view-models and the external message backend.

use commsearch_api::{ApiClient, Credential, Message, Result};

/// Data source for the search and detail view-models.
///
/// Implemented for [`ApiClient`]; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)] // view-models drive these futures locally, no Send bound needed
pub trait MessageApi {
    /// Runs a full-text search and returns the matching messages in backend
    /// order.
    async fn search(&self, credential: &Credential, query: &str) -> Result<Vec<Message>>;

    /// Fetches one message by id.
    async fn fetch_message(&self, credential: &Credential, id: &str) -> Result<Message>;

    /// Sets the review status of a message.
    async fn update_status(&self, credential: &Credential, id: &str, status: &str) -> Result<()>;
}

impl MessageApi for ApiClient {
    async fn search(&self, credential: &Credential, query: &str) -> Result<Vec<Message>> {
        Self::search(self, credential, query).await
    }

    async fn fetch_message(&self, credential: &Credential, id: &str) -> Result<Message> {
        Self::fetch_message(self, credential, id).await
    }

    async fn update_status(&self, credential: &Credential, id: &str, status: &str) -> Result<()> {
        Self::update_status(self, credential, id, status).await
    }
}
