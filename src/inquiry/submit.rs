//! Submission state machine
//!
//! Drives one inquiry attempt end to end: clear stale errors, validate
//! every required field in one pass, then make exactly one POST and settle
//! back to `Idle` whatever happens. The busy indicator is released on every
//! exit from `Submitting`, before any alert or delayed close.

use async_trait::async_trait;
use std::time::Duration;

use crate::inquiry::client::InquiryApi;
use crate::inquiry::form::{validate, FieldError};
use crate::inquiry::store::FormFieldStore;

/// How long the success banner stays up before the modal auto-closes.
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_secs(3);

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Presentation side effects of the flow. Implemented over signals by the
/// modal and by a recording fake in tests.
pub trait InquirySurface {
    /// Disable/enable the submit control and swap its label.
    fn set_submitting(&mut self, busy: bool);

    /// Show the success banner.
    fn show_success(&mut self);

    /// Surface a blocking failure message.
    fn alert(&mut self, message: &str);

    /// Close the inquiry modal.
    fn close_modal(&mut self);
}

/// Scheduled-delay capability, injected so tests can simulate time instead
/// of waiting on a clock.
#[async_trait(?Send)]
pub trait Delay {
    async fn delay(&self, duration: Duration);
}

/// Production delay: a browser timer under the `web` feature, immediate
/// otherwise.
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn delay(&self, duration: Duration) {
        #[cfg(feature = "web")]
        gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
        #[cfg(not(feature = "web"))]
        let _ = duration;
    }
}

/// Outcome of one attempt, after all side effects have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; every failing field's error was surfaced and no
    /// network call was made.
    Rejected(Vec<FieldError>),
    /// The server accepted the inquiry.
    Accepted,
    /// The server rejected it or the request never got through; carries the
    /// message that was alerted.
    Failed(String),
}

/// One inquiry attempt over injected capabilities.
pub struct SubmissionFlow<S, U, A, D> {
    store: S,
    surface: U,
    api: A,
    delay: D,
    state: SubmissionState,
}

impl<S, U, A, D> SubmissionFlow<S, U, A, D>
where
    S: FormFieldStore,
    U: InquirySurface,
    A: InquiryApi,
    D: Delay,
{
    pub fn new(store: S, surface: U, api: A, delay: D) -> Self {
        Self {
            store,
            surface,
            api,
            delay,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Run one submission attempt to completion.
    pub async fn submit(&mut self) -> SubmitOutcome {
        // Stale errors never persist across attempts.
        self.store.clear_errors();

        let form = self.store.snapshot();

        if let Err(errors) = validate(&form) {
            for error in &errors {
                self.store.set_error(error.field, error.message);
            }
            tracing::debug!(count = errors.len(), "inquiry rejected by validation");
            // State stays Idle, no network call.
            return SubmitOutcome::Rejected(errors);
        }

        self.state = SubmissionState::Submitting;
        self.surface.set_submitting(true);

        let result = self.api.submit_inquiry(&form).await;

        // Release the busy control on every exit from Submitting.
        self.surface.set_submitting(false);

        match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.surface.show_success();
                self.store.reset();

                self.delay.delay(SUCCESS_CLOSE_DELAY).await;
                self.surface.close_modal();

                self.state = SubmissionState::Idle;
                SubmitOutcome::Accepted
            }
            Err(err) => {
                self.state = SubmissionState::Failed;
                tracing::warn!(error = %err, "inquiry submission failed");

                let message = err.user_message().to_string();
                self.surface.alert(&message);

                self.state = SubmissionState::Idle;
                SubmitOutcome::Failed(message)
            }
        }
    }
}
