use super::session_store;
use crate::{
    app::AppConfig,
    auth::{enter_portfolio, SessionStore},
    cli::terminal::TerminalUi,
};
use anyhow::{anyhow, Result};

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
}

/// # Errors
/// Returns an error when no complete session is stored.
pub fn handle(args: &Args) -> Result<()> {
    open(&session_store(&args.config))
}

/// Runs the protected page entry check against `sessions`.
pub(super) fn open(sessions: &SessionStore) -> Result<()> {
    let mut ui = TerminalUi::new();
    enter_portfolio(sessions, &mut ui)
        .map(|_| ())
        .ok_or_else(|| anyhow!("no active session, sign in with `twenty20 login`"))
}
