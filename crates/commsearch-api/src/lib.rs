//! # commsearch-api
//!
//! Typed HTTP client for the comms message backend.
//!
//! The backend owns authentication, the search index, and the message store;
//! this crate only speaks its wire protocol:
//!
//! - `GET /search?q={query}` - full-text search over messages
//! - `GET /messages` - paged message listing
//! - `GET /messages/{id}` - single message lookup
//! - `PUT /messages/{id}` - status update
//!
//! Every call takes an explicit [`Credential`] (the opaque session cookie
//! issued by the external session provider) rather than reading ambient
//! state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use commsearch_api::{ApiClient, Credential, Endpoint};
//!
//! #[tokio::main]
//! async fn main() -> commsearch_api::Result<()> {
//!     let client = ApiClient::new(Endpoint::localhost());
//!     let credential = Credential::new("d0e9...");
//!
//!     let results = client.search(&credential, "wire transfer").await?;
//!     println!("{} hits", results.len());
//!
//!     let message = client.fetch_message(&credential, "42").await?;
//!     client.update_status(&credential, &message.id, "compliant").await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod credential;
mod error;
mod model;

pub use client::{ApiClient, Endpoint};
pub use credential::{Credential, SESSION_COOKIE};
pub use error::{Error, Result};
pub use model::{
    ListOptions, Message, SortOrder, UpdateStatusRequest, STATUS_COMPLIANT, STATUS_NON_COMPLIANT,
};
