use crate::{
    api::{ApiClient, ApiError, ApiResponse, LoginRequest, SignupRequest},
    pages::{login::repository as login_repository, signup::repository as signup_repository},
    router::{view_set_for, ViewSet},
    utils::{
        storage::{self as storage_utils, SharedTokenStore, StorageError},
        token::{self, DecodeError, Identity},
    },
};
use chrono::Utc;
use leptos::*;
use log::{debug, info, warn};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Initializing,
    Ready,
}

/// `identity` is present iff `token` is present and decoded; both are
/// always replaced together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub identity: Option<Identity>,
    pub phase: SessionPhase,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Initializing
    }

    pub fn view_set(&self) -> ViewSet {
        view_set_for(self.identity.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid session token: {0}")]
    Decode(#[from] DecodeError),
    #[error("session token has expired")]
    Expired,
    #[error("could not persist session token: {0}")]
    Storage(#[from] StorageError),
}

/// Single owner of the session state and the only writer of the token slot.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<Session>,
    store: StoredValue<SharedTokenStore>,
}

impl SessionContext {
    pub fn new(store: SharedTokenStore) -> Self {
        Self {
            state: create_rw_signal(Session::default()),
            store: store_value(store),
        }
    }

    pub fn state(&self) -> Signal<Session> {
        self.state.into()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity.clone())
    }

    pub fn current_token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.with(|s| s.phase)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .with(|s| s.identity.as_ref().map(Identity::is_admin).unwrap_or(false))
    }

    pub fn view_set(&self) -> ViewSet {
        self.state.with(Session::view_set)
    }

    /// Validates `token` before anything is persisted. A token that fails to
    /// decode or has expired is discarded and the current session is kept.
    /// Surrounding whitespace from the transport is dropped; the trimmed
    /// token is what gets stored and sent.
    pub fn login(&self, token: &str) -> Result<Identity, SessionError> {
        let token = token.trim();
        let identity = token::decode(token).map_err(|err| {
            warn!("Rejected session token at login: {}", err);
            SessionError::from(err)
        })?;
        if identity.is_expired_at(Utc::now()) {
            warn!("Rejected expired session token at login");
            return Err(SessionError::Expired);
        }
        self.store.with_value(|store| store.save(token))?;
        self.publish(Some(token.to_string()), Some(identity.clone()));
        info!(
            "Signed in as {} ({})",
            identity.email,
            identity.role.as_str()
        );
        Ok(identity)
    }

    pub fn logout(&self) {
        if let Err(err) = self.store.with_value(|store| store.clear()) {
            warn!("Failed to clear stored session token: {}", err);
        }
        self.publish(None, None);
        info!("Signed out");
    }

    /// Restores the session from the durable slot, purging a token that no
    /// longer decodes or has expired, and marks the session ready.
    pub fn check_auth(&self) -> Option<Identity> {
        let restored = self.restore();
        let first = self.state.with_untracked(|s| s.phase) == SessionPhase::Initializing;
        self.state.update(|s| {
            match &restored {
                Some((token, identity)) => {
                    s.token = Some(token.clone());
                    s.identity = Some(identity.clone());
                }
                None => {
                    s.token = None;
                    s.identity = None;
                }
            }
            s.phase = SessionPhase::Ready;
        });
        if first {
            debug!(
                "Session ready ({})",
                if restored.is_some() {
                    "restored"
                } else {
                    "anonymous"
                }
            );
        }
        restored.map(|(_, identity)| identity)
    }

    /// A 401 means the server no longer accepts the token; drop the session.
    pub fn handle_api_error(&self, error: &ApiError) -> bool {
        if error.is_unauthorized() && self.state.with_untracked(Session::is_authenticated) {
            warn!("Server rejected the session token; signing out");
            self.logout();
            true
        } else {
            false
        }
    }

    fn restore(&self) -> Option<(String, Identity)> {
        let stored = match self.store.with_value(|store| store.load()) {
            Ok(stored) => stored,
            Err(err) => {
                warn!("Could not read stored session token: {}", err);
                None
            }
        };
        let token = stored?;
        match token::decode(&token) {
            Ok(identity) if !identity.is_expired_at(Utc::now()) => Some((token, identity)),
            Ok(_) => {
                info!("Stored session token has expired; purging");
                self.purge();
                None
            }
            Err(err) => {
                warn!("Stored session token is invalid ({}); purging", err);
                self.purge();
                None
            }
        }
    }

    fn purge(&self) {
        if let Err(err) = self.store.with_value(|store| store.clear()) {
            warn!("Failed to purge stored session token: {}", err);
        }
    }

    fn publish(&self, token: Option<String>, identity: Option<Identity>) {
        self.state.update(|s| {
            s.token = token;
            s.identity = identity;
        });
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = use_context::<ApiClient>()
        .map(|api| api.token_store())
        .unwrap_or_else(storage_utils::default_token_store);
    let session = SessionContext::new(store);
    provide_context(session);
    session.check_auth();
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(storage_utils::default_token_store()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &login_repository::LoginRepository,
    session: SessionContext,
) -> Result<Identity, ApiError> {
    let response = repo.login(request).await?;
    session.login(&response.token).map_err(|err| {
        ApiError::unknown(format!(
            "The server returned an unusable session token: {}",
            err
        ))
    })
}

pub fn use_login_action() -> Action<LoginRequest, Result<Identity, ApiError>> {
    let session = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, session).await }
    })
}

/// Signing up does not sign in; the caller is sent to the login page.
pub fn use_signup_action() -> Action<SignupRequest, Result<ApiResponse, ApiError>> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = signup_repository::SignupRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &SignupRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { repo.signup(payload).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let session = use_session();
    create_action(move |_: &()| async move { session.logout() })
}
