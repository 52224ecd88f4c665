//! Domain ports defining the edges of the hexagon.
//!
//! Ports expose strongly typed errors so adapters map their failures into
//! predictable variants instead of returning `anyhow::Result`.

mod macros;
pub(crate) use macros::define_port_error;

mod food_api;

#[cfg(test)]
pub use food_api::MockFoodApi;
pub use food_api::{FIXTURE_TOKEN, FixtureFoodApi, FoodApi, FoodApiError};
