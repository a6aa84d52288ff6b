//! Listing use case: load the feed -> filter to this week -> group & sort.
//!
//! Orchestrates ShowtimeSource and Clock. Rendering is left to the caller.

use crate::adapters::feed::parse_showtimes;
use crate::domain::{DomainError, Listing, ShowtimeRow, WeekRange, build_schedule};
use crate::ports::{Clock, ShowtimeSource};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ListingService {
    source: Arc<dyn ShowtimeSource>,
    clock: Arc<dyn Clock>,
}

impl ListingService {
    pub fn new(source: Arc<dyn ShowtimeSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// Fetch and parse every row of the feed.
    pub async fn load_showtimes(&self) -> Result<Vec<ShowtimeRow>, DomainError> {
        let location = self.source.location();
        let body = self.source.fetch().await?;
        let rows = parse_showtimes(&body)?;
        debug!(location = %location, rows = rows.len(), "feed parsed");
        Ok(rows)
    }

    /// Build the listing for the week containing the clock's current reading.
    pub async fn build_listing(&self) -> Result<Listing, DomainError> {
        let rows = self.load_showtimes().await?;
        let total = rows.len();
        let week = WeekRange::containing(self.clock.now());
        let films = build_schedule(rows, &week);
        let listing = Listing { week, films };

        info!(
            week_start = %listing.week.start.date(),
            week_end = %listing.week.end.date(),
            rows = total,
            showtimes = listing.showtime_count(),
            films = listing.films.len(),
            "listing built"
        );
        Ok(listing)
    }
}
