//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;
use chrono::NaiveDateTime;

/// Where the showtime CSV comes from (HTTP, local file).
#[async_trait::async_trait]
pub trait ShowtimeSource: Send + Sync {
    /// Retrieve the raw CSV body. Transport failures map to `DomainError::Feed`.
    async fn fetch(&self) -> Result<String, DomainError>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Source of "now". One reading is taken per listing build.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// A page element whose content can be replaced or extended with markup.
pub trait Container {
    fn inner_html(&self) -> Result<String, DomainError>;

    fn set_inner_html(&mut self, html: &str) -> Result<(), DomainError>;

    fn append_html(&mut self, html: &str) -> Result<(), DomainError>;

    fn clear(&mut self) -> Result<(), DomainError> {
        self.set_inner_html("")
    }
}
