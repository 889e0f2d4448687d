//! Live gate over a provider's auth state.

use tokio::sync::watch;

use auth_provider::AuthProvider;
use domain::{evaluate, AuthSnapshot, GateView, Surface};

/// Re-evaluates a surface's view on every published snapshot.
pub struct GateWatcher {
    surface: Surface,
    rx: watch::Receiver<AuthSnapshot>,
}

impl GateWatcher {
    pub fn new(surface: Surface, provider: &dyn AuthProvider) -> Self {
        Self::from_receiver(surface, provider.subscribe())
    }

    pub fn from_receiver(surface: Surface, rx: watch::Receiver<AuthSnapshot>) -> Self {
        Self { surface, rx }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// View for the latest snapshot
    pub fn current(&mut self) -> GateView {
        evaluate(self.surface, &self.rx.borrow_and_update())
    }

    /// Wait for the next published snapshot.
    ///
    /// Returns `None` once the provider is gone.
    pub async fn changed(&mut self) -> Option<GateView> {
        self.rx.changed().await.ok()?;
        Some(self.current())
    }

    /// Wait until the provider has finished loading.
    pub async fn settled(&mut self) -> GateView {
        let surface = self.surface;
        if let Ok(snapshot) = self.rx.wait_for(|snapshot| !snapshot.loading).await {
            return evaluate(surface, &snapshot);
        }
        // Provider dropped while loading; its last value stands
        self.current()
    }
}
