//! Sign-up payload and authentication token.
//!
//! Neither type validates its input: the sign-up form submits whatever the
//! user typed, empty strings included. Secrets are kept out of `Debug`
//! output so they never end up in logs.

use std::fmt;

use zeroize::Zeroizing;

const REDACTED: &str = "<redacted>";

/// Snapshot of the sign-up form sent to the remote API.
///
/// # Examples
/// ```
/// use food_delivery_client::domain::SignUpRequest;
///
/// let request = SignUpRequest::new("Ana", "ana@x.com", "secret123");
/// assert_eq!(request.email(), "ana@x.com");
/// assert!(!format!("{request:?}").contains("secret123"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl SignUpRequest {
    /// Build a request from raw form values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Display name entered by the user.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address entered by the user.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password entered by the user.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Opaque authentication token returned by a successful sign-up.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(Zeroizing<String>);

impl AuthToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Whether the server returned an empty token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("AuthToken(<empty>)")
        } else {
            write!(f, "AuthToken({REDACTED})")
        }
    }
}
