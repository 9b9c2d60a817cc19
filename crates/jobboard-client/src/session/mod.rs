//! Who is signed in.
//!
//! A [`SessionStore`] is either anonymous or holds the [`UserView`] returned
//! by the last successful login. The view is written to [`SessionStorage`] on
//! login and read back by [`SessionStore::restore`] on the next start, where
//! it is trusted without asking the server again.

use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use crate::api::PortalApi;
use crate::error::{ClientError, StorageError};
use crate::model::{LoginCredentials, Registration, Role, UserView};
use crate::resource::StateContainer;
use crate::storage::SessionStorage;

/// Shown when a login fails without a server-supplied reason.
pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
/// Shown when a registration fails without a server-supplied reason.
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

/// Snapshot of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Signed-in user; `None` while anonymous.
    pub user: Option<UserView>,
    /// A login or registration is in flight.
    pub loading: bool,
    /// Message from the last failed login or registration.
    pub error: Option<String>,
}

impl SessionState {
    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the signed-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Apply one transition.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::LoginPending | SessionEvent::RegisterPending => {
                self.loading = true;
                self.error = None;
            }
            SessionEvent::LoginFulfilled(user) => {
                self.loading = false;
                self.user = Some(user);
            }
            SessionEvent::RegisterFulfilled => {
                self.loading = false;
                self.error = None;
            }
            SessionEvent::LoginRejected(message) | SessionEvent::RegisterRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            SessionEvent::Logout => {
                self.user = None;
                self.error = None;
            }
            SessionEvent::ClearError => self.error = None,
        }
    }
}

/// Session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Credentials were submitted.
    LoginPending,
    /// The server accepted the credentials.
    LoginFulfilled(UserView),
    /// The server refused, or the request failed.
    LoginRejected(String),
    /// A sign-up form was submitted.
    RegisterPending,
    /// The account was created. The session is unchanged.
    RegisterFulfilled,
    /// The sign-up was refused.
    RegisterRejected(String),
    /// The user signed out.
    Logout,
    /// The displayed error was dismissed.
    ClearError,
}

/// Session state plus its durable copy.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    state: Mutex<SessionState>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Start from whatever `storage` holds.
    ///
    /// An absent or unparseable entry yields an anonymous session.
    pub fn restore(storage: S) -> Self {
        let user = storage.read().and_then(|raw| {
            serde_json::from_str::<UserView>(&raw)
                .inspect_err(|err| warn!(error = %err, "discarding unreadable session entry"))
                .ok()
        });
        if let Some(restored) = &user {
            info!(username = %restored.username, "session restored");
        }
        Self {
            storage,
            state: Mutex::new(SessionState {
                user,
                ..SessionState::default()
            }),
        }
    }

    /// Sign in, replacing any current session.
    ///
    /// On failure the session keeps its previous user and records the
    /// error message.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] raised by `api`.
    pub async fn login<A>(
        &self,
        api: &A,
        credentials: &LoginCredentials,
    ) -> Result<UserView, ClientError>
    where
        A: PortalApi + ?Sized,
    {
        self.dispatch(SessionEvent::LoginPending);
        match api.login(credentials).await {
            Ok(user) => {
                info!(username = %user.username, role = %user.role, "signed in");
                self.dispatch(SessionEvent::LoginFulfilled(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.dispatch(SessionEvent::LoginRejected(err.user_message()));
                Err(err)
            }
        }
    }

    /// Create an account without signing in.
    ///
    /// The role is checked first; an unknown role fails without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for an unknown role, otherwise the
    /// error raised by `api`.
    pub async fn register<A>(
        &self,
        api: &A,
        registration: &Registration,
    ) -> Result<UserView, ClientError>
    where
        A: PortalApi + ?Sized,
    {
        if let Err(err) = registration.role.parse::<Role>() {
            self.dispatch(SessionEvent::RegisterRejected(err.user_message()));
            return Err(err);
        }
        self.dispatch(SessionEvent::RegisterPending);
        match api.register(registration).await {
            Ok(user) => {
                info!(username = %user.username, "account registered");
                self.dispatch(SessionEvent::RegisterFulfilled);
                Ok(user)
            }
            Err(err) => {
                self.dispatch(SessionEvent::RegisterRejected(err.user_message()));
                Err(err)
            }
        }
    }

    /// Sign out and delete the durable entry. No request is made.
    ///
    /// The in-memory session is cleared even when deleting the entry fails.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] when the entry cannot be deleted.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.transition(SessionEvent::Logout);
        self.storage.remove()
    }

    /// Dismiss the displayed error.
    pub fn clear_error(&self) {
        self.dispatch(SessionEvent::ClearError);
    }

    /// Backing storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn transition(&self, event: SessionEvent) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(event);
    }

    fn persist(&self, event: &SessionEvent) -> Result<(), StorageError> {
        match event {
            SessionEvent::LoginFulfilled(user) => match serde_json::to_string(user) {
                Ok(raw) => self.storage.write(&raw),
                Err(err) => {
                    warn!(error = %err, "session user could not be serialised");
                    Ok(())
                }
            },
            SessionEvent::Logout => self.storage.remove(),
            _ => Ok(()),
        }
    }
}

impl<S: SessionStorage> StateContainer for SessionStore<S> {
    type State = SessionState;
    type Event = SessionEvent;

    fn state(&self) -> SessionState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `event` and mirror sign-in and sign-out to storage.
    ///
    /// Storage failures are logged; the in-memory transition always applies.
    fn dispatch(&self, event: SessionEvent) {
        if let Err(err) = self.persist(&event) {
            warn!(error = %err, "session storage update failed");
        }
        self.transition(event);
    }
}

#[cfg(test)]
mod tests;
