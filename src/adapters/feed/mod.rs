//! Showtime feed adapters. Implement ShowtimeSource and parse the CSV body.

pub mod csv_feed;
pub mod file_source;
pub mod http_source;

pub use csv_feed::parse_showtimes;
pub use file_source::FileSource;
pub use http_source::{HttpSource, is_url};

use crate::ports::ShowtimeSource;
use std::sync::Arc;

/// Pick the source for a configured location: URLs (or any location when a
/// base URL is set) go over HTTP, everything else is read from disk.
pub fn source_for(location: &str, base_url: Option<&str>) -> Arc<dyn ShowtimeSource> {
    match base_url {
        _ if is_url(location) => Arc::new(HttpSource::new(location)),
        Some(base) => Arc::new(HttpSource::new(HttpSource::resolve(base, location))),
        None => Arc::new(FileSource::new(location)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_location() {
        assert_eq!(source_for("updated_file.csv", None).location(), "updated_file.csv");
        assert_eq!(
            source_for("updated_file.csv", Some("https://site.test")).location(),
            "https://site.test/updated_file.csv"
        );
        assert_eq!(
            source_for("https://a.test/x.csv", Some("https://site.test")).location(),
            "https://a.test/x.csv"
        );
    }
}
