//! Mock authentication and the persisted session.
//!
//! The session is mirrored to local storage under [`AUTH_KEY`] as
//! `{"user": ..., "isAuthenticated": ...}` and read back on startup.

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use crate::db::LocalStorage;
use crate::models::{Role, User};

pub const AUTH_KEY: &str = "auth";

const INVALID_CREDENTIALS: &str = "Invalid email or password";

struct MockUser {
    id: &'static str,
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
}

const MOCK_USERS: [MockUser; 3] = [
    MockUser {
        id: "1",
        email: "admin@example.com",
        password: "admin123",
        name: "Administrator",
        role: Role::Admin,
    },
    MockUser {
        id: "2",
        email: "support@example.com",
        password: "support123",
        name: "Support Specialist",
        role: Role::Support,
    },
    MockUser {
        id: "3",
        email: "user@example.com",
        password: "user123",
        name: "User",
        role: Role::User,
    },
];

impl MockUser {
    fn to_user(&self) -> User {
        User {
            id: self.id.to_string(),
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAuth {
    user: Option<User>,
    is_authenticated: bool,
}

#[derive(Debug, Default)]
pub struct AuthSession {
    state: AuthState,
}

impl AuthSession {
    pub fn new() -> Self {
        AuthSession::default()
    }

    /// Restores the session saved by a previous login. Missing or unreadable
    /// entries give a signed-out session.
    pub fn restore(storage: &LocalStorage) -> Result<Self> {
        let persisted: Option<PersistedAuth> = storage.get_json(AUTH_KEY)?;

        let state = match persisted {
            Some(PersistedAuth {
                user: Some(user),
                is_authenticated: true,
            }) => AuthState {
                user: Some(user),
                is_authenticated: true,
                ..AuthState::default()
            },
            _ => AuthState::default(),
        };

        Ok(AuthSession { state })
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// Returns the signed-in user or fails with a hint to log in.
    pub fn require_user(&self) -> Result<&User> {
        match (&self.state.user, self.state.is_authenticated) {
            (Some(user), true) => Ok(user),
            _ => bail!("Not logged in. Run 'helpdesk login <email>' first."),
        }
    }

    /// Checks credentials against the mock user directory.
    pub fn authenticate(credentials: &Credentials) -> Result<User> {
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            bail!("Email and password are required");
        }

        MOCK_USERS
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .filter(|u| u.password == credentials.password)
            .map(MockUser::to_user)
            .ok_or_else(|| anyhow!(INVALID_CREDENTIALS))
    }

    pub fn begin_login(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
    }

    /// Applies the outcome of a login attempt and mirrors it to storage.
    pub fn finish_login(&mut self, storage: &LocalStorage, result: Result<User>) -> Result<User> {
        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "Login succeeded");
                self.state = AuthState {
                    user: Some(user.clone()),
                    is_authenticated: true,
                    is_loading: false,
                    error: None,
                };
                self.persist(storage)?;
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.state = AuthState {
                    user: None,
                    is_authenticated: false,
                    is_loading: false,
                    error: Some(e.to_string()),
                };
                if let Err(pe) = self.persist(storage) {
                    tracing::warn!(error = %pe, "Failed to save signed-out session");
                }
                Err(e)
            }
        }
    }

    pub fn login(&mut self, storage: &LocalStorage, credentials: &Credentials) -> Result<User> {
        self.begin_login();
        let result = Self::authenticate(credentials);
        self.finish_login(storage, result)
    }

    pub fn logout(&mut self, storage: &LocalStorage) -> Result<()> {
        if let Some(user) = &self.state.user {
            tracing::info!(user_id = %user.id, "Logged out");
        }
        self.state = AuthState::default();
        storage.remove_item(AUTH_KEY)?;
        Ok(())
    }

    fn persist(&self, storage: &LocalStorage) -> Result<()> {
        let persisted = PersistedAuth {
            user: self.state.user.clone(),
            is_authenticated: self.state.is_authenticated,
        };
        storage.set_json(AUTH_KEY, &persisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_storage() -> LocalStorage {
        LocalStorage::in_memory().unwrap()
    }

    #[test]
    fn test_login_success() {
        let storage = setup_storage();
        let mut session = AuthSession::new();

        let user = session
            .login(&storage, &Credentials::new("admin@example.com", "admin123"))
            .unwrap();

        assert_eq!(user.role, Role::Admin);
        assert!(session.is_authenticated());
        assert!(!session.state().is_loading);
        assert_eq!(session.state().error, None);
    }

    #[test]
    fn test_login_email_is_case_insensitive() {
        let storage = setup_storage();
        let mut session = AuthSession::new();

        let user = session
            .login(&storage, &Credentials::new("  Support@Example.com ", "support123"))
            .unwrap();
        assert_eq!(user.id, "2");
    }

    #[test]
    fn test_login_wrong_password() {
        let storage = setup_storage();
        let mut session = AuthSession::new();

        let err = session
            .login(&storage, &Credentials::new("admin@example.com", "nope"))
            .unwrap_err();

        assert_eq!(err.to_string(), INVALID_CREDENTIALS);
        assert!(!session.is_authenticated());
        assert_eq!(session.state().error.as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[test]
    fn test_failed_login_keeps_credentials_error_when_storage_fails() {
        let storage = setup_storage();
        storage.drop_table().unwrap();
        let mut session = AuthSession::new();

        let err = session
            .login(&storage, &Credentials::new("admin@example.com", "nope"))
            .unwrap_err();

        assert_eq!(err.to_string(), INVALID_CREDENTIALS);
        assert_eq!(session.state().error.as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[test]
    fn test_login_unknown_user_same_message() {
        let err = AuthSession::authenticate(&Credentials::new("ghost@example.com", "admin123"))
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_login_requires_fields() {
        let err = AuthSession::authenticate(&Credentials::new("", "")).unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_session_persisted_shape() {
        let storage = setup_storage();
        let mut session = AuthSession::new();
        session
            .login(&storage, &Credentials::new("user@example.com", "user123"))
            .unwrap();

        let raw = storage.get_item(AUTH_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["isAuthenticated"], true);
        assert_eq!(value["user"]["email"], "user@example.com");
        assert!(value["user"].get("password").is_none());
    }

    #[test]
    fn test_restore_after_login() {
        let storage = setup_storage();
        let mut session = AuthSession::new();
        session
            .login(&storage, &Credentials::new("admin@example.com", "admin123"))
            .unwrap();

        let restored = AuthSession::restore(&storage).unwrap();
        assert!(restored.is_authenticated());
        assert_eq!(restored.require_user().unwrap().name, "Administrator");
    }

    #[test]
    fn test_restore_without_entry() {
        let storage = setup_storage();
        let restored = AuthSession::restore(&storage).unwrap();
        assert!(!restored.is_authenticated());
        assert!(restored.require_user().is_err());
    }

    #[test]
    fn test_restore_ignores_inconsistent_entry() {
        let storage = setup_storage();
        storage
            .set_item(AUTH_KEY, r#"{"user":null,"isAuthenticated":true}"#)
            .unwrap();

        let restored = AuthSession::restore(&storage).unwrap();
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn test_logout_clears_storage() {
        let storage = setup_storage();
        let mut session = AuthSession::new();
        session
            .login(&storage, &Credentials::new("admin@example.com", "admin123"))
            .unwrap();

        session.logout(&storage).unwrap();

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(storage.get_item(AUTH_KEY).unwrap(), None);
    }

    #[test]
    fn test_failed_login_signs_out_previous_user() {
        let storage = setup_storage();
        let mut session = AuthSession::new();
        session
            .login(&storage, &Credentials::new("admin@example.com", "admin123"))
            .unwrap();
        let _ = session.login(&storage, &Credentials::new("admin@example.com", "bad"));

        let restored = AuthSession::restore(&storage).unwrap();
        assert!(!restored.is_authenticated());
    }
}
