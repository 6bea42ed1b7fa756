pub mod login;
pub mod logout;
pub mod portfolio;
pub mod register;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::{
    app::{AppConfig, HttpGateway},
    auth::{Collaborators, FileStore, SessionStore, TokioDelay},
};
use anyhow::Result;
use std::sync::Arc;

#[derive(Debug)]
pub enum Action {
    Login(login::Args),
    Register(register::Args),
    Portfolio(portfolio::Args),
    Logout(logout::Args),
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails or the flow does not complete.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Session slot under the configured data directory.
fn session_store(config: &AppConfig) -> SessionStore {
    SessionStore::new(Arc::new(FileStore::new(config.data_dir.clone())))
}

/// Wires the landing page collaborators from the resolved configuration.
fn collaborators(config: &AppConfig) -> Result<Collaborators> {
    Ok(Collaborators {
        gateway: Arc::new(HttpGateway::new(config.api_base_url.clone())?),
        session: session_store(config),
        delay: Arc::new(TokioDelay),
        registration_redirect_delay: config.registration_redirect_delay,
    })
}
