use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::auth_dto::{LoginPayload, RegisterPayload};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::services::seed;
use crate::services::storage::LocalStorage;

/// Local-storage key holding the serialized active user.
pub const SESSION_KEY: &str = "user";

const MAX_ID_STEP: i64 = 1000;

/// Mock accounts and the single active session. Passwords are never checked
/// or stored.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<RwLock<Vec<User>>>,
    session: Arc<RwLock<Option<User>>>,
    storage: Arc<dyn LocalStorage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self::with_users(seed::users(), storage)
    }

    pub fn with_users(users: Vec<User>, storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            session: Arc::new(RwLock::new(None)),
            storage,
        }
    }

    /// Loads the persisted session once at startup. An unreadable record is
    /// logged and dropped from storage; an unreadable store is reset to empty.
    pub async fn restore(&self) -> Option<User> {
        let raw = match self.storage.get_item(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read stored session");
                if let Err(e) = self.storage.clear() {
                    tracing::warn!(error = %e, "Failed to reset local storage");
                }
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                {
                    let mut users = self.users.write().await;
                    if !users.iter().any(|u| u.id == user.id) {
                        users.push(user.clone());
                    }
                }
                *self.session.write().await = Some(user.clone());
                tracing::info!(user_id = user.id, "Restored stored session");
                Some(user)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse stored user");
                if let Err(e) = self.storage.remove_item(SESSION_KEY) {
                    tracing::warn!(error = %e, "Failed to drop unreadable session");
                }
                None
            }
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.clone()
    }

    pub async fn require_user(&self) -> Result<User> {
        self.current_user()
            .await
            .ok_or_else(|| Error::Unauthorized("Not authenticated".to_string()))
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<User> {
        payload.validate()?;

        let found = self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == payload.email)
            .cloned();

        let Some(user) = found else {
            tracing::info!("Login rejected for unknown email");
            return Err(Error::Unauthorized("Invalid email or password".to_string()));
        };

        self.establish(&user).await?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        payload.validate()?;
        payload.ensure_passwords_match()?;

        // Held across the write: the account exists only once its session is persisted.
        let mut users = self.users.write().await;
        let max_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        let step: i64 = rand::thread_rng().gen_range(1..=MAX_ID_STEP);
        let id = max_id
            .checked_add(step)
            .ok_or_else(|| Error::Internal("user id space exhausted".to_string()))?;
        let user = User {
            id,
            username: payload.username,
            email: payload.email,
            name: payload.name,
            is_employer: payload.is_employer,
        };

        self.establish(&user).await?;
        users.push(user.clone());
        drop(users);
        tracing::info!(user_id = user.id, is_employer = user.is_employer, "User registered");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.storage.remove_item(SESSION_KEY)?;
        let previous = self.session.write().await.take();
        if let Some(user) = previous {
            tracing::info!(user_id = user.id, "User logged out");
        }
        Ok(())
    }

    async fn establish(&self, user: &User) -> Result<()> {
        let serialized = serde_json::to_string(user)?;
        self.storage.set_item(SESSION_KEY, &serialized)?;
        *self.session.write().await = Some(user.clone());
        Ok(())
    }
}
