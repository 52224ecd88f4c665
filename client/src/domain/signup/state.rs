//! Closed sets rendered by the sign-up screen.

/// Outcome of the most recent sign-up attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignUpUiState {
    /// No attempt has been made yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The server issued a token.
    Success,
    /// The request failed.
    Error,
}

impl SignUpUiState {
    /// Whether an attempt has finished, successfully or not.
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

/// One-shot navigation requests emitted by the sign-up flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpNavigation {
    /// Leave sign-up for the login screen.
    ToLogin,
    /// Sign-up succeeded; continue to the home screen.
    ToHome,
}
