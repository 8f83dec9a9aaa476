//! Message detail page state: the loaded message, the status-edit buffer,
//! and the submit-then-refetch update flow.

mod view_model;

pub use view_model::{DetailPhase, MessageDetail, UpdateError};
