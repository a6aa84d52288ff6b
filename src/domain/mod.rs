//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the week calculation and the grouping pipeline live here.

pub mod entities;
pub mod errors;
pub mod schedule;
pub mod week;

pub use entities::{ALMOST_SOLD_OUT, FieldValue, FilmGroup, Listing, ShowtimeRow};
pub use errors::DomainError;
pub use schedule::{build_schedule, earliest_showtime};
pub use week::{WeekRange, is_date_in_week, parse_instant};
