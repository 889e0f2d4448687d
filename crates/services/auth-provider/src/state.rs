//! Observable auth state.
//!
//! The provider pushes a new [`AuthSnapshot`] whenever the user or the
//! loading flag changes; readers hold a `watch` receiver.

use tokio::sync::watch;

use domain::AuthSnapshot;

/// Owner side of the auth state channel.
#[derive(Debug)]
pub struct AuthStateCell {
    tx: watch::Sender<AuthSnapshot>,
}

impl AuthStateCell {
    pub fn new(initial: AuthSnapshot) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// New subscription, starting at the current snapshot
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.tx.borrow().clone()
    }

    /// Publish a snapshot; subscribers are only woken when it differs.
    pub fn publish(&self, snapshot: AuthSnapshot) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        })
    }
}

impl Default for AuthStateCell {
    fn default() -> Self {
        Self::new(AuthSnapshot::loading())
    }
}
