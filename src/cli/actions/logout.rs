use super::session_store;
use crate::{
    app::AppConfig,
    auth::{guard::LOGOUT_PROMPT, logout},
    cli::terminal::TerminalUi,
};
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub assume_yes: bool,
}

/// # Errors
/// Returns an error if the prompt cannot be shown or the stored session cannot be removed.
pub fn handle(args: &Args) -> Result<()> {
    let mut ui = TerminalUi::new();

    if !confirmed(args.assume_yes, || ui.confirm(LOGOUT_PROMPT))? {
        ui.notice("Logout cancelled.");
        return Ok(());
    }

    logout(&session_store(&args.config), &mut ui)?;
    ui.notice("Signed out.");
    Ok(())
}

/// `--yes` skips the question; otherwise the answer decides.
fn confirmed(assume_yes: bool, ask: impl FnOnce() -> Result<bool>) -> Result<bool> {
    if assume_yes {
        Ok(true)
    } else {
        ask()
    }
}
