//! Food delivery client library modules.
//!
//! The domain owns the sign-up interaction and the `FoodApi` port; outbound
//! adapters implement the port over HTTP.

pub mod config;
pub mod domain;
pub mod observable;
pub mod outbound;

/// Settings used to build the HTTP adapter.
pub use config::ApiSettings;
