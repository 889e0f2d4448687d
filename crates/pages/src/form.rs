//! Credential form state and the submission gate.
//!
//! A [`FormController`] is one form instance: it holds the values, the
//! field-level errors from the last validation run and the form-level error
//! from the last provider call. At most one submission runs at a time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use auth_provider::AuthProvider;
use domain::{CredentialForm, FieldErrors, FormField, ROOT_PATH};

use crate::action::SubmitAction;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Provider accepted the credentials; go to this path
    Navigate(&'static str),
    /// Validation failed; the provider was not called
    Invalid(FieldErrors),
    /// Provider rejected the credentials with this message
    Failed(String),
    /// Another submission was still in flight
    Ignored,
}

/// Point-in-time copy of a form for rendering.
#[derive(Debug, Clone)]
pub struct FormSnapshot<F> {
    pub values: F,
    pub field_errors: FieldErrors,
    pub form_error: Option<String>,
    /// A submit has been attempted since the last reset
    pub submitted: bool,
    pub submitting: bool,
}

impl<F> FormSnapshot<F> {
    /// Submit button state
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.field_errors.is_empty()
    }

    /// Field error to display; hidden until the first submit
    pub fn field_error(&self, field: FormField) -> Option<&str> {
        if self.submitted {
            self.field_errors.get(field)
        } else {
            None
        }
    }
}

#[derive(Default)]
struct FormState<F> {
    values: F,
    field_errors: FieldErrors,
    form_error: Option<String>,
    submitted: bool,
}

/// One credential form instance.
pub struct FormController<F> {
    state: Mutex<FormState<F>>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the submission ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<F> FormController<F>
where
    F: CredentialForm + SubmitAction,
{
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState<F>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Update a field; its validation error is cleared immediately.
    pub fn edit(&self, field: FormField, value: impl Into<String>) {
        let mut state = self.lock();
        state.values.set_field(field, value.into());
        state.field_errors.clear(field);
    }

    /// Discard values and errors (page left or reopened).
    pub fn reset(&self) {
        *self.lock() = FormState::default();
    }

    pub fn snapshot(&self) -> FormSnapshot<F> {
        let state = self.lock();
        FormSnapshot {
            values: state.values.clone(),
            field_errors: state.field_errors.clone(),
            form_error: state.form_error.clone(),
            submitted: state.submitted,
            submitting: self.is_submitting(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.lock().field_errors.is_empty()
    }

    /// Validate and, when valid, hand the values to the provider.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without touching the provider
    /// while an earlier submission has not resolved yet.
    pub async fn submit(&self, provider: &dyn AuthProvider) -> SubmitOutcome {
        self.submit_with(provider, &[]).await
    }

    /// Apply `edits` and submit, as one step under the in-flight guard.
    ///
    /// When another submission is in flight the edits are discarded
    /// along with the attempt.
    pub async fn submit_with(
        &self,
        provider: &dyn AuthProvider,
        edits: &[(FormField, String)],
    ) -> SubmitOutcome {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            debug!("Submission already in flight, ignoring");
            return SubmitOutcome::Ignored;
        };

        let values = {
            let mut state = self.lock();
            for (field, value) in edits {
                state.values.set_field(*field, value.clone());
            }
            state.submitted = true;
            state.form_error = None;
            state.field_errors = state.values.field_errors();
            if !state.field_errors.is_empty() {
                return SubmitOutcome::Invalid(state.field_errors.clone());
            }
            state.values.clone()
        };

        match values.dispatch(provider).await {
            Ok(()) => {
                self.reset();
                SubmitOutcome::Navigate(ROOT_PATH)
            }
            Err(err) => {
                let message = err.user_message().to_string();
                warn!(code = %err.code, "Submission rejected by provider");
                self.lock().form_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

impl<F> Default for FormController<F>
where
    F: CredentialForm + SubmitAction,
{
    fn default() -> Self {
        Self::new()
    }
}
