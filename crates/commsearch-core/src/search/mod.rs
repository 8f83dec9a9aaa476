//! Search-results page state: query, result list, and pagination.

mod pagination;
mod view_model;

pub use pagination::{paginate, Page};
pub use view_model::{SearchResults, MESSAGES_PER_PAGE};
