use super::collaborators;
use crate::{
    app::AppConfig,
    auth::{FormSubmissionController, SubmitOutcome},
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
    pub confirm_password: SecretString,
}

/// Mounts the landing page, switches to the register view, and submits it.
/// # Errors
/// Returns an error if wiring fails or the registration is not accepted.
#[instrument(skip(args), fields(api = %args.config.api_base_url))]
pub async fn handle(args: Args) -> Result<()> {
    let deps = collaborators(&args.config)?;

    let mut landing = FormSubmissionController::mount(TerminalUi::new(), deps);
    landing.show_register();
    landing.set_register_input(args.email, args.password, args.confirm_password);

    match landing.submit_register().await {
        SubmitOutcome::Registered(_) => {
            let ui = landing.ui();
            if let Some(email) = ui.prefilled_email() {
                ui.notice(&format!("Sign in with: twenty20 login --email {email}"));
            }
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            bail!("registration form has {} invalid field(s)", errors.len())
        }
        SubmitOutcome::Failed(message) => bail!("registration failed: {message}"),
        _ => bail!("registration did not complete"),
    }
}
