//! View-model for the single-message detail page.

use commsearch_api::{Credential, Error as ApiError, Message, Result};
use tracing::{debug, error, warn};

use crate::api::MessageApi;

/// Errors from the status-update path.
///
/// The original page logged these and showed nothing; surfacing them as a
/// `Result` leaves that call to the caller instead of re-hiding it.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// `submit_status` was called before any message was loaded.
    #[error("no message loaded")]
    NotLoaded,

    /// The backend rejected the update; nothing changed on either side.
    #[error("status update rejected: {0}")]
    Rejected(#[source] ApiError),

    /// The update was accepted but the follow-up refetch failed; the view
    /// still holds the pre-update snapshot.
    #[error("status updated but refresh failed: {0}")]
    Refresh(#[source] ApiError),
}

/// Where the detail view is in its edit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPhase {
    /// Showing the loaded message, draft untouched.
    #[default]
    Viewing,
    /// The draft buffer has been written to.
    Editing,
    /// An update request is in flight.
    Submitting,
}

/// State behind the message detail page.
///
/// Holds a read-only snapshot of one message plus the locally-buffered
/// pending status string. The buffer starts empty, is overwritten by each
/// keystroke, and is cleared only by a successful submit.
#[derive(Debug, Clone, Default)]
pub struct MessageDetail {
    message: Option<Message>,
    draft: String,
    phase: DetailPhase,
}

impl MessageDetail {
    /// Creates an empty detail view with no message loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the message with the given id, discarding any previous snapshot
    /// and draft.
    ///
    /// # Errors
    ///
    /// Propagates the backend error unchanged - a nonexistent id fails the
    /// whole page load ([`ApiError::NotFound`]) rather than rendering a
    /// partial view. Prior state is left untouched on failure.
    pub async fn load<A: MessageApi>(
        &mut self,
        api: &A,
        credential: &Credential,
        message_id: &str,
    ) -> Result<()> {
        let message = api.fetch_message(credential, message_id).await?;
        debug!(message_id, "message loaded");

        self.message = Some(message);
        self.draft.clear();
        self.phase = DetailPhase::Viewing;
        Ok(())
    }

    /// The loaded message, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// The pending status draft.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Current phase of the edit cycle.
    #[must_use]
    pub const fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// Overwrites the status draft. Any string is accepted; validation of
    /// the status vocabulary is the backend's call.
    pub fn set_status_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.phase = DetailPhase::Editing;
    }

    /// Submits the draft as the message's new status.
    ///
    /// On success the draft is cleared and the message is invalidated and
    /// refetched through the same api, so the view reflects exactly what the
    /// backend now holds rather than a locally-patched guess.
    ///
    /// # Errors
    ///
    /// - [`UpdateError::NotLoaded`] if no message has been loaded.
    /// - [`UpdateError::Rejected`] if the backend refuses the update; the
    ///   snapshot and the draft are left untouched and the failure is logged.
    /// - [`UpdateError::Refresh`] if the update succeeded but the refetch
    ///   failed; the draft is cleared, the stale snapshot is retained.
    pub async fn submit_status<A: MessageApi>(
        &mut self,
        api: &A,
        credential: &Credential,
    ) -> std::result::Result<(), UpdateError> {
        let Some(id) = self.message.as_ref().map(|message| message.id.clone()) else {
            return Err(UpdateError::NotLoaded);
        };

        self.phase = DetailPhase::Submitting;
        if let Err(err) = api.update_status(credential, &id, &self.draft).await {
            error!(message_id = %id, %err, "status update failed");
            self.phase = DetailPhase::Editing;
            return Err(UpdateError::Rejected(err));
        }

        self.draft.clear();
        self.phase = DetailPhase::Viewing;

        // Invalidate and refetch instead of patching the snapshot in place.
        match api.fetch_message(credential, &id).await {
            Ok(message) => {
                debug!(message_id = %id, "status updated, message refreshed");
                self.message = Some(message);
                Ok(())
            }
            Err(err) => {
                warn!(message_id = %id, %err, "status updated but refresh failed");
                Err(UpdateError::Refresh(err))
            }
        }
    }
}
