//! Infrastructure adapters. Implement outbound ports.
//!
//! Feed sources, clock, page document, JSON export, terminal UI. Map errors to DomainError.

pub mod clock;
pub mod feed;
pub mod page;
pub mod persistence;
pub mod ui;
