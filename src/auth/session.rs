//! Client-side session slot. The stored record is written only after a
//! successful login and is either absent or a complete [`Session`]; a missing,
//! unreadable, or partial record reads as absent so a corrupted slot never
//! reaches the caller.

use crate::{
    app::AppError,
    auth::{storage::KeyValueStore, types::Session},
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

pub const SESSION_KEY: &str = "twenty20:user";

#[derive(Clone)]
pub struct SessionStore {
    slot: Arc<dyn KeyValueStore>,
}

/// Shape accepted on read; every field optional so incomplete records can be rejected.
#[derive(Deserialize)]
struct StoredSession {
    email: Option<String>,
    username: Option<String>,
}

impl SessionStore {
    #[must_use]
    pub fn new(slot: Arc<dyn KeyValueStore>) -> Self {
        Self { slot }
    }

    #[must_use]
    pub fn get(&self) -> Option<Session> {
        let raw = match self.slot.get_item(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("session slot unreadable: {err}");
                return None;
            }
        };

        let Ok(stored) = serde_json::from_str::<StoredSession>(&raw) else {
            debug!("session slot holds an unparseable record");
            return None;
        };

        complete(stored)
    }

    /// Persists a session; incomplete records are refused.
    ///
    /// # Errors
    /// Returns an error if the record is incomplete or the slot cannot be written.
    pub fn set(&self, session: &Session) -> Result<(), AppError> {
        if session.email.is_empty() || session.username.is_empty() {
            return Err(AppError::Storage(
                "Refusing to store an incomplete session.".to_string(),
            ));
        }

        let raw = serde_json::to_string(session)
            .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))?;
        self.slot.set_item(SESSION_KEY, &raw)
    }

    /// # Errors
    /// Returns an error if the slot cannot be modified.
    pub fn clear(&self) -> Result<(), AppError> {
        self.slot.remove_item(SESSION_KEY)
    }
}

/// Extracts a complete session from the `user` record of a login response.
#[must_use]
pub fn session_from_user(user: &Value) -> Option<Session> {
    let stored = StoredSession::deserialize(user).ok()?;
    complete(stored)
}

fn complete(stored: StoredSession) -> Option<Session> {
    let email = stored.email.filter(|email| !email.is_empty())?;
    let username = stored.username.filter(|username| !username.is_empty())?;
    Some(Session { email, username })
}
