//! Page use case: template + listing outcome -> finished page.
//!
//! The navbar is injected regardless of the feed. A feed failure or a missing
//! `films-list` leaves the list empty but still yields a page to write.

use crate::adapters::page::{FILMS_LIST_ID, NAVBAR_ID, PageDocument, inject_navbar, render_into};
use crate::adapters::persistence::ListingJson;
use crate::domain::{DomainError, Listing};
use tracing::{error, info, warn};

/// Finished page and what went into it.
#[derive(Debug)]
pub struct AssembledPage {
    pub html: String,
    pub navbar_injected: bool,
    /// Film blocks written into `films-list`; `None` when nothing was rendered.
    pub films_rendered: Option<usize>,
}

#[derive(Default)]
pub struct PageService {
    export: Option<ListingJson>,
}

impl PageService {
    pub fn new(export: Option<ListingJson>) -> Self {
        Self { export }
    }

    pub async fn assemble(
        &self,
        template: String,
        listing: Result<Listing, DomainError>,
    ) -> AssembledPage {
        let mut page = PageDocument::new(template);

        let navbar = page
            .element(NAVBAR_ID)
            .and_then(|mut slot| inject_navbar(&mut slot));
        if let Err(e) = &navbar {
            warn!(error = %e, "navbar not injected");
        }

        let films_rendered = match listing {
            Ok(listing) => {
                let rendered = page
                    .element(FILMS_LIST_ID)
                    .and_then(|mut slot| render_into(&mut slot, &listing.films));
                if let Some(export) = &self.export {
                    if let Err(e) = export.save(&listing).await {
                        warn!(error = %e, "listing export failed");
                    }
                }
                match rendered {
                    Ok(blocks) => {
                        info!(films = blocks, "film list rendered");
                        Some(blocks)
                    }
                    Err(e) => {
                        error!(error = %e, "film list not rendered");
                        None
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "feed unavailable; no showtimes displayed");
                None
            }
        };

        AssembledPage {
            html: page.into_string(),
            navbar_injected: navbar.is_ok(),
            films_rendered,
        }
    }
}
