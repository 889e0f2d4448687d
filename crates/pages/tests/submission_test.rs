//! Form submission scenarios across concurrent attempts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{watch, Notify};

use auth_provider::{AuthProvider, AuthStateCell, MockAuthProvider};
use domain::{AuthError, AuthResult, AuthSnapshot, FormField, GateView, SessionUser, Surface};
use pages::{home, GateWatcher, SignInForm, SignUpForm, SubmitOutcome};

/// Provider whose sign-in blocks until released.
struct GatedProvider {
    calls: AtomicUsize,
    release: Notify,
    state: AuthStateCell,
}

impl GatedProvider {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            release: Notify::new(),
            state: AuthStateCell::new(AuthSnapshot::signed_out()),
        }
    }
}

#[async_trait]
impl AuthProvider for GatedProvider {
    async fn sign_in(&self, email: &str, _password: &str) -> AuthResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        self.state.publish(AuthSnapshot::signed_in(SessionUser::new(
            "uid-1",
            Some(email.to_string()),
        )));
        Ok(())
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> AuthResult<()> {
        Err(AuthError::new("auth/operation-not-allowed"))
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.state.publish(AuthSnapshot::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.state.subscribe()
    }
}

#[tokio::test]
async fn test_second_submit_is_ignored_while_in_flight() {
    let provider = Arc::new(GatedProvider::new());
    let form = Arc::new(SignInForm::new());
    form.edit(FormField::Email, "user@example.com");
    form.edit(FormField::Password, "secret");

    let first = {
        let provider = provider.clone();
        let form = form.clone();
        tokio::spawn(async move { form.submit(provider.as_ref()).await })
    };

    // Wait until the first call has reached the provider
    while provider.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }
    assert!(form.is_submitting());
    assert!(!form.can_submit());
    assert!(form.snapshot().submitting);

    assert_eq!(form.submit(provider.as_ref()).await, SubmitOutcome::Ignored);

    provider.release.notify_one();
    assert_eq!(first.await.unwrap(), SubmitOutcome::Navigate("/"));

    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_edits_arriving_during_submission_are_discarded() {
    let provider = Arc::new(GatedProvider::new());
    let form = Arc::new(SignInForm::new());

    let first = {
        let provider = provider.clone();
        let form = form.clone();
        tokio::spawn(async move {
            let edits = [
                (FormField::Email, "first@example.com".to_string()),
                (FormField::Password, "secret".to_string()),
            ];
            form.submit_with(provider.as_ref(), &edits).await
        })
    };
    while provider.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    let edits = [(FormField::Email, "second@example.com".to_string())];
    assert_eq!(
        form.submit_with(provider.as_ref(), &edits).await,
        SubmitOutcome::Ignored
    );
    assert_eq!(form.snapshot().values.email, "first@example.com");

    provider.release.notify_one();
    assert_eq!(first.await.unwrap(), SubmitOutcome::Navigate("/"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        provider.state.snapshot().user.and_then(|user| user.email),
        Some("first@example.com".to_string())
    );
}

#[tokio::test]
async fn test_sign_in_flow_moves_gate_to_home() {
    let provider = Arc::new(GatedProvider::new());
    let mut login_gate = GateWatcher::new(Surface::SignIn, provider.as_ref());
    assert_eq!(login_gate.current(), GateView::Form);

    let form = Arc::new(SignInForm::new());
    form.edit(FormField::Email, "user@example.com");
    form.edit(FormField::Password, "secret");

    let submit = {
        let provider = provider.clone();
        let form = form.clone();
        tokio::spawn(async move { form.submit(provider.as_ref()).await })
    };
    while provider.calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }
    provider.release.notify_one();

    assert_eq!(submit.await.unwrap(), SubmitOutcome::Navigate("/"));
    assert_eq!(login_gate.changed().await, Some(GateView::Redirect("/")));

    let mut home_gate = GateWatcher::new(Surface::Home, provider.as_ref());
    assert_eq!(
        home_gate.current(),
        GateView::Personalized {
            email: "user@example.com".to_string()
        }
    );

    home::sign_out(provider.as_ref()).await;
    assert_eq!(home_gate.changed().await, Some(GateView::Welcome));
}

#[tokio::test]
async fn test_sign_up_happy_path() {
    let mut provider = MockAuthProvider::new();
    provider
        .expect_sign_up()
        .withf(|email, password| email == "a@b.com" && password == "abcdef")
        .times(1)
        .returning(|_, _| Ok(()));

    let form = SignUpForm::new();
    form.edit(FormField::Email, "a@b.com");
    form.edit(FormField::Password, "abcdef");
    form.edit(FormField::ConfirmPassword, "abcdef");

    assert_eq!(form.submit(&provider).await, SubmitOutcome::Navigate("/"));
}

#[tokio::test]
async fn test_sign_up_rejection_is_translated() {
    let mut provider = MockAuthProvider::new();
    provider
        .expect_sign_up()
        .times(1)
        .returning(|_, _| Err(AuthError::new("auth/email-already-in-use")));

    let form = SignUpForm::new();
    form.edit(FormField::Email, "taken@example.com");
    form.edit(FormField::Password, "abcdef");
    form.edit(FormField::ConfirmPassword, "abcdef");

    assert_eq!(
        form.submit(&provider).await,
        SubmitOutcome::Failed("An account with this email already exists".to_string())
    );
    assert!(form.can_submit());
}

#[tokio::test]
async fn test_unknown_provider_error_uses_generic_sentence() {
    let mut provider = MockAuthProvider::new();
    provider
        .expect_sign_in()
        .returning(|_, _| Err(AuthError::unknown("socket hang up")));

    let form = SignInForm::new();
    form.edit(FormField::Email, "user@example.com");
    form.edit(FormField::Password, "secret");

    assert_eq!(
        form.submit(&provider).await,
        SubmitOutcome::Failed(domain::FALLBACK_ERROR_MESSAGE.to_string())
    );
}
