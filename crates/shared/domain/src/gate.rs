//! Page-level auth-state gate.
//!
//! Decides what a page shows for the current auth status. The decision is a
//! pure function of `(surface, snapshot)` and is re-evaluated on every
//! snapshot the provider publishes.

use crate::constants::{LOGIN_PATH, ROOT_PATH, SIGNUP_PATH};
use crate::session::{AuthSnapshot, AuthStatus};

/// Pages guarded by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Home,
    SignIn,
    SignUp,
}

impl Surface {
    /// Login and signup only make sense for signed-out visitors
    pub fn is_auth_only(self) -> bool {
        matches!(self, Surface::SignIn | Surface::SignUp)
    }

    pub fn path(self) -> &'static str {
        match self {
            Surface::Home => ROOT_PATH,
            Surface::SignIn => LOGIN_PATH,
            Surface::SignUp => SIGNUP_PATH,
        }
    }
}

/// What a page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    /// Neutral waiting indicator, nothing else
    Waiting,
    /// Navigate away and render nothing
    Redirect(&'static str),
    /// Render the page's credential form
    Form,
    /// Home page for a signed-in user, with a sign-out action
    Personalized { email: String },
    /// Home page for a visitor, with a sign-in action
    Welcome,
}

impl GateView {
    pub fn is_waiting(&self) -> bool {
        matches!(self, GateView::Waiting)
    }
}

/// Evaluate the gate for a surface.
pub fn evaluate(surface: Surface, snapshot: &AuthSnapshot) -> GateView {
    match (AuthStatus::from(snapshot), surface.is_auth_only()) {
        (AuthStatus::Loading, _) => GateView::Waiting,
        (AuthStatus::Authenticated(_), true) => GateView::Redirect(ROOT_PATH),
        (AuthStatus::Unauthenticated, true) => GateView::Form,
        (AuthStatus::Authenticated(user), false) => GateView::Personalized {
            email: user.display_email().to_string(),
        },
        (AuthStatus::Unauthenticated, false) => GateView::Welcome,
    }
}
