//! Entry check and logout for the protected portfolio page.

use crate::{
    app::AppError,
    auth::{
        session::SessionStore,
        types::{Destination, Session},
        ui::{Navigator, Renderer},
    },
};
use tracing::{debug, info};

/// Question asked before signing out.
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Reads the session once on page load.
///
/// Without a complete session the user is sent back to the landing view and
/// nothing is rendered. UX-only guard; real access control must live on the API.
pub fn enter_portfolio<U: Renderer + Navigator>(
    sessions: &SessionStore,
    ui: &mut U,
) -> Option<Session> {
    let Some(session) = sessions.get() else {
        debug!("no session present, redirecting to landing");
        ui.navigate(Destination::Landing);
        return None;
    };

    ui.show_account(&session);
    Some(session)
}

/// Clears the session and returns to the landing view.
///
/// # Errors
/// Returns an error if the session slot cannot be cleared; no navigation happens then.
pub fn logout(sessions: &SessionStore, navigator: &mut dyn Navigator) -> Result<(), AppError> {
    sessions.clear()?;
    info!("signed out");
    navigator.navigate(Destination::Landing);
    Ok(())
}
