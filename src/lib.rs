//! showtimes: weekly movie-theater listing page generated from a CSV feed, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
