//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Transport failure retrieving the showtime feed.
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Feed parse error: {0}")]
    Parse(String),

    /// The page has no element with the given `id` (or it is never closed).
    #[error("Missing element: #{0}")]
    MissingElement(String),

    #[error("Page error: {0}")]
    Page(String),

    #[error("Export failed: {0}")]
    Export(String),
}
