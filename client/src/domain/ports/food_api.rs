//! Driven port for the remote food-delivery API.
//!
//! The domain owns the request and response contract; adapters own transport
//! and encoding and map every failure into [`FoodApiError`].

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{AuthToken, FoodItemId, SignUpRequest};

define_port_error! {
    /// Errors surfaced while calling the food API.
    pub enum FoodApiError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "food api transport failed: {message}",
        /// The call exceeded its time budget.
        Timeout { message: String } =>
            "food api timeout: {message}",
        /// The server answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "food api rejected request with status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "food api response decode failed: {message}",
        /// The adapter could not build a request URL.
        InvalidEndpoint { message: String } =>
            "food api endpoint invalid: {message}",
    }
}

impl FoodApiError {
    /// Return whether repeating the call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Timeout { .. } => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Decode { .. } | Self::InvalidEndpoint { .. } => false,
        }
    }
}

/// Port for the two remote operations the client needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodApi: Send + Sync {
    /// Fetch the ordered list of food item identifiers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use food_delivery_client::domain::ports::{FixtureFoodApi, FoodApi};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let items = FixtureFoodApi.fetch_food().await?;
    /// assert!(!items.is_empty());
    /// # Ok::<(), food_delivery_client::domain::ports::FoodApiError>(())
    /// # }).unwrap();
    /// ```
    async fn fetch_food(&self) -> Result<Vec<FoodItemId>, FoodApiError>;

    /// Register a user and return the issued authentication token.
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthToken, FoodApiError>;
}

/// Token handed out by [`FixtureFoodApi`].
pub const FIXTURE_TOKEN: &str = "fixture-token";

/// Fixture implementation with a fixed menu that accepts every sign-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureFoodApi;

#[async_trait]
impl FoodApi for FixtureFoodApi {
    async fn fetch_food(&self) -> Result<Vec<FoodItemId>, FoodApiError> {
        Ok(["margherita", "pad-thai", "falafel-wrap"]
            .into_iter()
            .map(FoodItemId::new)
            .collect())
    }

    async fn sign_up(&self, _request: &SignUpRequest) -> Result<AuthToken, FoodApiError> {
        Ok(AuthToken::new(FIXTURE_TOKEN))
    }
}
