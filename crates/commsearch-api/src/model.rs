//! Wire models for the message backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Status value for a message cleared by review.
pub const STATUS_COMPLIANT: &str = "compliant";

/// Status value for a message flagged by review.
pub const STATUS_NON_COMPLIANT: &str = "non_compliant";

/// A message as returned by the backend.
///
/// The snapshot is read-only on this side; the only mutation the backend
/// accepts is a status update, issued separately via
/// [`UpdateStatusRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Stable identifier, the sole route/lookup key.
    ///
    /// The backend serializes it as a JSON number, routes treat it as an
    /// opaque string; both forms are accepted and normalized to a string.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    /// Message subject line.
    pub subject: String,
    /// Sender address.
    pub from_email: String,
    /// Recipient address.
    #[serde(default)]
    pub to_email: String,
    /// Message body.
    pub content: String,
    /// Review status. `None` until the message is first triaged.
    #[serde(default)]
    pub status: Option<String>,
    /// Creation time as unix seconds.
    #[serde(default)]
    pub created_at: i64,
}

/// Request body for `PUT /messages/{id}`.
///
/// Any string is sent as-is; validation of the status vocabulary is the
/// backend's call.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest<'a> {
    /// The new status value.
    pub status: &'a str,
}

/// Sort direction for the message listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first (backend default).
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

impl SortOrder {
    /// The query-parameter value the backend expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query options for `GET /messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Sort direction by creation time.
    pub order: SortOrder,
    /// 1-based page number.
    pub page: u32,
    /// Messages per page.
    pub page_size: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            order: SortOrder::Asc,
            page: 1,
            page_size: 10,
        }
    }
}

/// Accepts a message id as either a JSON number or a string.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}
