use super::{collaborators, portfolio};
use crate::{
    app::AppConfig,
    auth::{types::Destination, FormSubmissionController, SubmitOutcome},
    cli::terminal::TerminalUi,
};
use anyhow::{bail, Result};
use secrecy::SecretString;
use tracing::instrument;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub email: String,
    pub password: SecretString,
}

/// Mounts the landing page, submits the login form, and follows the redirect.
/// # Errors
/// Returns an error if wiring fails or the login does not reach the portfolio.
#[instrument(skip(args), fields(api = %args.config.api_base_url))]
pub async fn handle(args: Args) -> Result<()> {
    let deps = collaborators(&args.config)?;
    let sessions = deps.session.clone();

    let mut landing = FormSubmissionController::mount(TerminalUi::new(), deps);
    landing.set_login_input(args.email, args.password);

    let outcome = landing.submit_login().await;
    let ui = landing.into_ui();

    match outcome {
        SubmitOutcome::LoggedIn(_) if ui.destination() == Some(Destination::Portfolio) => {
            portfolio::open(&sessions)
        }
        SubmitOutcome::Invalid(errors) => bail!("login form has {} invalid field(s)", errors.len()),
        SubmitOutcome::Failed(message) => bail!("login failed: {message}"),
        _ => bail!("login did not complete"),
    }
}
