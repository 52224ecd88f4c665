//! HTTP outbound adapters.
//!
//! This module provides a reqwest implementation of the `FoodApi` port.

mod dto;
mod food_api;

pub use food_api::{HttpFoodApi, HttpFoodApiIdentity};
