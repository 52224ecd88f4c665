//! Wire DTOs for the food API.
//!
//! The adapter encodes and decodes these transport shapes, then maps them into
//! domain types in one pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AuthToken, FoodItemId, SignUpRequest};

#[derive(Serialize)]
pub(super) struct SignUpRequestDto<'a> {
    pub(super) name: &'a str,
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

impl<'a> From<&'a SignUpRequest> for SignUpRequestDto<'a> {
    fn from(request: &'a SignUpRequest) -> Self {
        Self {
            name: request.name(),
            email: request.email(),
            password: request.password(),
        }
    }
}

impl fmt::Debug for SignUpRequestDto<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequestDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Deserialize)]
pub(super) struct AuthResponseDto {
    pub(super) token: String,
}

impl AuthResponseDto {
    pub(super) fn into_domain(self) -> AuthToken {
        AuthToken::new(self.token)
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(super) struct FoodListDto(pub(super) Vec<String>);

impl FoodListDto {
    pub(super) fn into_domain(self) -> Vec<FoodItemId> {
        self.0.into_iter().map(FoodItemId::from).collect()
    }
}
