pub mod listing_json;

pub use listing_json::ListingJson;
