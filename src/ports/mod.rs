//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into feed sources, the clock and the page.

pub mod outbound;

pub use outbound::{Clock, Container, ShowtimeSource};
