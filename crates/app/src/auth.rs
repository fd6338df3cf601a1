use client::{ApiClient, Session};
use dioxus::prelude::*;

/// Session handed to the view layer by whoever signed the user in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session: Signal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.user_id.clone())
    }

    pub fn logout(&mut self) {
        tracing::info!("Signing out");
        self.session.set(None);
    }

    /// Build a backend client for the current session. Subscribes the
    /// caller to session changes.
    pub fn client_for(&self, base_url: &str) -> Option<ApiClient> {
        let session = self.session.read().clone()?;
        match ApiClient::new(base_url, session) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(error = %err, "Cannot build API client");
                None
            }
        }
    }
}

/// Backend client derived from [`AuthState`]; `None` while signed out.
#[derive(Clone, Copy, PartialEq)]
pub struct ApiHandle(pub Memo<Option<ApiClient>>);

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the session-bound backend client.
pub fn use_api() -> Memo<Option<ApiClient>> {
    use_context::<ApiHandle>().0
}
