//! Signup form state machine
//!
//! ```text
//! Idle --submit(invalid)--> Idle (is_valid = false)
//! Idle --submit(valid)----> Submitting
//! Submitting --outcome----> Idle (email cleared only on success)
//! ```
//!
//! [`SubmissionState`] holds the pure transitions so the Leptos component can
//! drive them from signals; [`SignupForm`] bundles the state with its
//! collaborators for callers that own everything directly.

use crate::core::notification::{ErrorLog, Notifier};
use crate::core::signup::{SignupOutcome, SignupRequest, SignupStore};
use crate::core::validation::{INVALID_EMAIL_MESSAGE, is_valid_email};

/// Why a submit event did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("{}", INVALID_EMAIL_MESSAGE)]
    InvalidEmail,

    #[error("A signup is already in progress")]
    InFlight,
}

/// Coarse phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Transient state owned by one signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    email: String,
    is_valid: bool,
    is_submitting: bool,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            email: String::new(),
            is_valid: true,
            is_submitting: false,
        }
    }
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn phase(&self) -> Phase {
        if self.is_submitting {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    /// Inline message for the email field, if any
    pub fn validation_message(&self) -> Option<&'static str> {
        (!self.is_valid).then_some(INVALID_EMAIL_MESSAGE)
    }

    /// Keystroke handler.
    ///
    /// Live validation only runs while the field is flagged invalid, so the
    /// error clears as soon as the input is fixed and never appears before
    /// the first failed submit.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        if !self.is_valid {
            self.is_valid = is_valid_email(&self.email);
        }
    }

    /// Submit handler: validates and moves to `Submitting`.
    ///
    /// Returns the request to send, or why nothing should be sent. An invalid
    /// email only flips the validity flag.
    pub fn begin_submit(&mut self, platform: &str) -> Result<SignupRequest, SubmitRejected> {
        if self.is_submitting {
            return Err(SubmitRejected::InFlight);
        }

        if !is_valid_email(&self.email) {
            self.is_valid = false;
            return Err(SubmitRejected::InvalidEmail);
        }

        self.is_valid = true;
        self.is_submitting = true;
        Ok(SignupRequest::new(self.email.clone(), platform))
    }

    /// Applies a completed attempt and returns to `Idle`
    pub fn finish(&mut self, outcome: &SignupOutcome) {
        if outcome.is_success() {
            self.email.clear();
        }
        self.is_submitting = false;
    }
}

/// Sends one request and reports the outcome.
///
/// Exactly one remote call and exactly one notification. Unexpected failures
/// also go to `log`. Never fails: every error folds into an outcome.
pub async fn perform_signup<S, N, L>(
    store: &S,
    request: &SignupRequest,
    notifier: &N,
    log: &L,
) -> SignupOutcome
where
    S: SignupStore,
    N: Notifier,
    L: ErrorLog,
{
    let result = store.insert_signup(request).await;
    let outcome = SignupOutcome::from_result(&result);

    if let (SignupOutcome::TransientFailure(_), Err(err)) = (&outcome, &result) {
        log.log_error("Error signing up", err);
    }

    notifier.notify(outcome.notification());
    outcome
}

/// Resets `is_submitting` when dropped, even if the request future is
/// abandoned mid-flight.
struct SubmittingGuard<'a> {
    state: &'a mut SubmissionState,
}

impl<'a> SubmittingGuard<'a> {
    fn new(state: &'a mut SubmissionState) -> Self {
        Self { state }
    }

    fn complete(self, outcome: &SignupOutcome) {
        self.state.finish(outcome);
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state.is_submitting = false;
    }
}

/// A signup form bound to its store and sinks
pub struct SignupForm<S, N, L> {
    state: SubmissionState,
    store: S,
    notifier: N,
    log: L,
}

impl<S, N, L> SignupForm<S, N, L>
where
    S: SignupStore,
    N: Notifier,
    L: ErrorLog,
{
    pub fn new(store: S, notifier: N, log: L) -> Self {
        Self {
            state: SubmissionState::new(),
            store,
            notifier,
            log,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn input(&mut self, value: impl Into<String>) {
        self.state.set_email(value);
    }

    /// Runs one end-to-end submission attempt for `platform`
    pub async fn submit(&mut self, platform: &str) -> Result<SignupOutcome, SubmitRejected> {
        let request = self.state.begin_submit(platform)?;

        let guard = SubmittingGuard::new(&mut self.state);
        let outcome = perform_signup(&self.store, &request, &self.notifier, &self.log).await;
        guard.complete(&outcome);

        Ok(outcome)
    }
}
