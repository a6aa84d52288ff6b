//! Application use cases. Orchestrate domain logic via ports.

pub mod listing_service;
pub mod page_service;

pub use listing_service::ListingService;
pub use page_service::{AssembledPage, PageService};
