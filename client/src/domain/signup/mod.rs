//! Sign-up interaction controller.
//!
//! The controller sits between the sign-up form and the [`FoodApi`] port. It
//! owns the three form fields, the [`SignUpUiState`] of the latest attempt,
//! and a stream of [`SignUpNavigation`] events.
//!
//! Field edits never block. [`SignUpController::submit`] flips the state to
//! `Loading` and snapshots the form before it returns, so edits made while the
//! request is in flight cannot change what was sent. Remote failures are
//! recorded in the state and logged; they are never returned to the caller.

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::SignUpRequest;
use crate::domain::ports::FoodApi;
use crate::observable::{EventStream, EventSubscription, StateCell, StateView};

mod state;

pub use state::{SignUpNavigation, SignUpUiState};

/// View-model for the sign-up screen.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use food_delivery_client::domain::ports::FixtureFoodApi;
/// use food_delivery_client::domain::{SignUpController, SignUpNavigation, SignUpUiState};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let controller = SignUpController::new(Arc::new(FixtureFoodApi));
/// let mut navigation = controller.navigation();
///
/// controller.set_name("Ana");
/// controller.set_email("ana@x.com");
/// controller.set_password("secret123");
/// controller.submit().await;
///
/// assert_eq!(controller.current_state(), SignUpUiState::Success);
/// assert_eq!(navigation.try_recv(), Some(SignUpNavigation::ToHome));
/// # });
/// ```
pub struct SignUpController {
    api: Arc<dyn FoodApi>,
    name: StateCell<String>,
    email: StateCell<String>,
    password: StateCell<String>,
    state: StateCell<SignUpUiState>,
    navigation: EventStream<SignUpNavigation>,
}

impl SignUpController {
    /// Build a controller around an API port with an empty form.
    pub fn new(api: Arc<dyn FoodApi>) -> Self {
        Self {
            api,
            name: StateCell::new(String::new()),
            email: StateCell::new(String::new()),
            password: StateCell::new(String::new()),
            state: StateCell::new(SignUpUiState::Idle),
            navigation: EventStream::new(),
        }
    }

    /// Replace the name field.
    pub fn set_name(&self, value: impl Into<String>) {
        self.name.set(value.into());
    }

    /// Replace the email field.
    pub fn set_email(&self, value: impl Into<String>) {
        self.email.set(value.into());
    }

    /// Replace the password field.
    pub fn set_password(&self, value: impl Into<String>) {
        self.password.set(value.into());
    }

    /// Observe the name field.
    pub fn name(&self) -> StateView<String> {
        self.name.view()
    }

    /// Observe the email field.
    pub fn email(&self) -> StateView<String> {
        self.email.view()
    }

    /// Observe the password field.
    pub fn password(&self) -> StateView<String> {
        self.password.view()
    }

    /// Observe the interaction state; late views start at the current value.
    pub fn state(&self) -> StateView<SignUpUiState> {
        self.state.view()
    }

    /// Interaction state right now.
    pub fn current_state(&self) -> SignUpUiState {
        self.state.get()
    }

    /// Subscribe to navigation events emitted from now on.
    pub fn navigation(&self) -> EventSubscription<SignUpNavigation> {
        self.navigation.subscribe()
    }

    /// Ask the screen to switch to login.
    pub fn navigate_to_login(&self) {
        self.emit_navigation(SignUpNavigation::ToLogin);
    }

    /// Submit the current form.
    ///
    /// The state is `Loading` and the request is captured by the time this
    /// returns; awaiting the future performs the remote call and records its
    /// outcome. Dropping the future abandons the call and leaves the state at
    /// `Loading`.
    pub fn submit(&self) -> impl Future<Output = ()> + Send + '_ {
        let request = self.begin_attempt();
        self.complete_attempt(request)
    }

    /// Submit the current form on the Tokio runtime.
    ///
    /// Same contract as [`Self::submit`]; the remote call runs as a spawned
    /// task so the caller keeps its handle only to await or abort it.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn submit_in_background(self: &Arc<Self>) -> JoinHandle<()> {
        let request = self.begin_attempt();
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.complete_attempt(request).await })
    }

    fn begin_attempt(&self) -> SignUpRequest {
        self.state.set(SignUpUiState::Loading);
        SignUpRequest::new(self.name.get(), self.email.get(), self.password.get())
    }

    async fn complete_attempt(&self, request: SignUpRequest) {
        debug!("submitting sign-up");
        match self.api.sign_up(&request).await {
            Ok(token) if token.is_empty() => {
                // The attempt stays `Loading`; callers watching the state
                // never see it settle for this response.
                warn!("sign-up succeeded without a token; state left unchanged");
            }
            Ok(_token) => {
                debug!("sign-up succeeded");
                self.state.set(SignUpUiState::Success);
                self.emit_navigation(SignUpNavigation::ToHome);
            }
            Err(error) => {
                warn!(error = %error, retryable = error.is_retryable(), "sign-up failed");
                self.state.set(SignUpUiState::Error);
            }
        }
    }

    fn emit_navigation(&self, event: SignUpNavigation) {
        let delivered = self.navigation.emit(event);
        if delivered == 0 {
            debug!(?event, "navigation event had no subscribers");
        }
    }
}
