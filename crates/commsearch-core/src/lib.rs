//! # commsearch-core
//!
//! View-model core for the two message-search pages: the search-results
//! listing and the single-message detail/status-update view.
//!
//! Both pages are thin presentation over a remote message backend. This
//! crate owns the part with actual behavioral contracts:
//!
//! - [`SearchResults`] - query, result list, and client-side pagination
//!   (fixed page size of 10, `ceil` page count, clamped slicing, no upper
//!   bound on the selected page).
//! - [`MessageDetail`] - the status-edit buffer and the
//!   submit-then-invalidate-and-refetch update flow.
//!
//! The backend is reached through the [`MessageApi`] seam, implemented for
//! [`commsearch_api::ApiClient`] and trivially mockable in tests. Credentials
//! are passed explicitly into every data-fetching call; there is no ambient
//! session state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod api;
pub mod detail;
pub mod search;

pub use api::MessageApi;
pub use commsearch_api::{
    ApiClient, Credential, Endpoint, Error as ApiError, Message, Result as ApiResult,
    STATUS_COMPLIANT, STATUS_NON_COMPLIANT,
};
pub use detail::{DetailPhase, MessageDetail, UpdateError};
pub use search::{paginate, Page, SearchResults, MESSAGES_PER_PAGE};
