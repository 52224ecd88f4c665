//! Domain primitives and the sign-up interaction.
//!
//! Purpose: keep the interaction logic independent of transport. Adapters
//! talk to the domain only through [`ports::FoodApi`].
//!
//! Public surface:
//! - SignUpRequest / AuthToken — sign-up payload and its opaque result.
//! - FoodItemId — identifier of one entry in the food list.
//! - SignUpController — owns the form, the UI state and navigation events.

pub mod auth;
pub mod food;
pub mod ports;
pub mod signup;

pub use self::auth::{AuthToken, SignUpRequest};
pub use self::food::FoodItemId;
pub use self::signup::{SignUpController, SignUpNavigation, SignUpUiState};
