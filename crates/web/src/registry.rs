//! Per-browser clients.
//!
//! Auth state belongs to a browser, not to the server: every browser gets
//! its own provider instance and its own form controllers, keyed by the id
//! stored in its client cookie.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

use auth_provider::{AuthProvider, FirebaseAuth, IdentityToolkitClient};
use pages::{SignInForm, SignUpForm};

/// Creates the provider instance of a new browser client.
pub trait ProviderFactory: Send + Sync {
    fn create(&self) -> Arc<dyn AuthProvider>;
}

impl<F> ProviderFactory for F
where
    F: Fn() -> Arc<dyn AuthProvider> + Send + Sync,
{
    fn create(&self) -> Arc<dyn AuthProvider> {
        self()
    }
}

/// Firebase providers sharing one Identity Toolkit connection pool.
pub struct FirebaseProviderFactory {
    client: IdentityToolkitClient,
}

impl FirebaseProviderFactory {
    pub fn new(client: IdentityToolkitClient) -> Self {
        Self { client }
    }
}

impl ProviderFactory for FirebaseProviderFactory {
    fn create(&self) -> Arc<dyn AuthProvider> {
        let auth = FirebaseAuth::new(Arc::new(self.client.clone()));
        // No persisted session to restore
        auth.resolve_initial_state();
        Arc::new(auth)
    }
}

/// State of one browser.
pub struct BrowserClient {
    id: Uuid,
    provider: Arc<dyn AuthProvider>,
    sign_in: SignInForm,
    sign_up: SignUpForm,
    last_seen: Mutex<Instant>,
}

impl BrowserClient {
    fn new(id: Uuid, provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            id,
            provider,
            sign_in: SignInForm::new(),
            sign_up: SignUpForm::new(),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn provider(&self) -> &dyn AuthProvider {
        self.provider.as_ref()
    }

    pub fn sign_in_form(&self) -> &SignInForm {
        &self.sign_in
    }

    pub fn sign_up_form(&self) -> &SignUpForm {
        &self.sign_up
    }

    fn touch(&self) {
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .elapsed()
    }
}

/// All live browser clients, at most `max_clients` of them.
pub struct ClientRegistry {
    clients: RwLock<HashMap<Uuid, Arc<BrowserClient>>>,
    factory: Arc<dyn ProviderFactory>,
    max_clients: usize,
}

impl ClientRegistry {
    pub fn new(factory: Arc<dyn ProviderFactory>, max_clients: usize) -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            factory,
            max_clients: max_clients.max(1),
        }
    }

    /// Client for a cookie id; unknown or missing ids get a fresh client.
    ///
    /// The flag is `true` when the client was created by this call. A full
    /// registry makes room by dropping its longest-idle client.
    pub fn resolve(&self, id: Option<Uuid>) -> (Arc<BrowserClient>, bool) {
        if let Some(id) = id {
            let clients = self.clients.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(client) = clients.get(&id) {
                client.touch();
                return (client.clone(), false);
            }
        }

        let client = Arc::new(BrowserClient::new(Uuid::new_v4(), self.factory.create()));
        debug!(client_id = %client.id, "Created browser client");
        let mut clients = self.clients.write().unwrap_or_else(PoisonError::into_inner);
        while clients.len() >= self.max_clients {
            let Some(oldest) = clients
                .values()
                .max_by_key(|client| client.idle_for())
                .map(|client| client.id)
            else {
                break;
            };
            clients.remove(&oldest);
            warn!(
                client_id = %oldest,
                max_clients = self.max_clients,
                "Client limit reached, evicted idle client"
            );
        }
        clients.insert(client.id, client.clone());
        (client, true)
    }

    /// Drop clients idle for at least `idle`; returns how many were dropped.
    pub fn sweep(&self, idle: Duration) -> usize {
        let mut clients = self.clients.write().unwrap_or_else(PoisonError::into_inner);
        let before = clients.len();
        clients.retain(|_, client| client.idle_for() < idle);
        before - clients.len()
    }

    pub fn len(&self) -> usize {
        self.clients
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Periodically drop idle browser clients.
pub fn spawn_sweeper(registry: Arc<ClientRegistry>, every: Duration, idle: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // First tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = registry.sweep(idle);
            if removed > 0 {
                debug!(removed, remaining = registry.len(), "Swept idle browser clients");
            }
        }
    })
}
