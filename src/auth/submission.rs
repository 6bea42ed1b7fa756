//! Submission lifecycle for the landing page forms.
//!
//! One submission moves through `Idle -> Validating -> Submitting -> Idle`.
//! Validation strictly precedes the request and the request strictly precedes
//! outcome handling. While a form is submitting its trigger stays disabled,
//! which is what keeps two submissions of the same form from overlapping.
//! Every exit path re-enables the trigger and restores its label.
//!
//! Flow Overview: a valid login stores the returned user record and navigates
//! to the portfolio. A valid registration shows a success banner, waits for the
//! configured delay, and returns to the login view with the new credentials
//! pre-filled. Failures become a form-scoped error banner; transport failures
//! use a fixed network error text instead of the server's payload.

use crate::{
    app::AppError,
    auth::{
        backend_error,
        gateway::{GatewayResponse, RequestGateway},
        session::{session_from_user, SessionStore},
        types::{
            Destination, FieldError, FieldId, FormKind, LoginRequest, RegisterRequest, Session,
            StatusKind, LOGIN_ENDPOINT, REGISTER_ENDPOINT,
        },
        ui::{Delay, Navigator, Renderer},
        validation::{self, Validation},
        view::{ViewState, ViewStateController},
    },
};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info, instrument, warn};

pub const NETWORK_ERROR: &str = "Network error.";
pub const REGISTRATION_SUCCESS: &str = "Registration successful.";
pub const SESSION_NOT_SAVED: &str = "Unable to save your session.";

#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: empty_secret(),
        }
    }
}

#[derive(Debug)]
pub struct RegisterForm {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: empty_secret(),
            confirm_password: empty_secret(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trigger was disabled; nothing happened.
    Ignored,
    /// Validation failed; no request was made.
    Invalid(Vec<FieldError>),
    /// The request failed; carries the status message shown to the user.
    Failed(String),
    LoggedIn(Session),
    /// Registration succeeded; carries the success message shown to the user.
    Registered(String),
}

/// Services the controller depends on besides the UI.
#[derive(Clone)]
pub struct Collaborators {
    pub gateway: Arc<dyn RequestGateway>,
    pub session: SessionStore,
    pub delay: Arc<dyn Delay>,
    pub registration_redirect_delay: Duration,
}

pub struct FormSubmissionController<U: Renderer + Navigator> {
    ui: U,
    deps: Collaborators,
    view: ViewStateController,
    login: LoginForm,
    register: RegisterForm,
    login_phase: SubmissionPhase,
    register_phase: SubmissionPhase,
}

impl<U: Renderer + Navigator> FormSubmissionController<U> {
    /// Mounts the landing page: clears any leftover session and shows the login view.
    pub fn mount(mut ui: U, deps: Collaborators) -> Self {
        if let Err(err) = deps.session.clear() {
            warn!("failed to clear stale session: {err}");
        }

        let mut view = ViewStateController::new();
        view.show_login(&mut ui);
        for form in [FormKind::Login, FormKind::Register] {
            ui.set_pending(form, false);
        }

        Self {
            ui,
            deps,
            view,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            login_phase: SubmissionPhase::Idle,
            register_phase: SubmissionPhase::Idle,
        }
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    #[must_use]
    pub fn into_ui(self) -> U {
        self.ui
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view.current()
    }

    #[must_use]
    pub fn phase(&self, form: FormKind) -> SubmissionPhase {
        match form {
            FormKind::Login => self.login_phase,
            FormKind::Register => self.register_phase,
        }
    }

    #[must_use]
    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    #[must_use]
    pub fn register_form(&self) -> &RegisterForm {
        &self.register
    }

    pub fn show_login(&mut self) {
        self.view.show_login(&mut self.ui);
    }

    pub fn show_register(&mut self) {
        self.view.show_register(&mut self.ui);
    }

    pub fn set_login_input(&mut self, email: impl Into<String>, password: SecretString) {
        self.login = LoginForm {
            email: email.into(),
            password,
        };
    }

    pub fn set_register_input(
        &mut self,
        email: impl Into<String>,
        password: SecretString,
        confirm_password: SecretString,
    ) {
        self.register = RegisterForm {
            email: email.into(),
            password,
            confirm_password,
        };
    }

    #[instrument(skip(self))]
    pub async fn submit_login(&mut self) -> SubmitOutcome {
        if self.login_phase != SubmissionPhase::Idle {
            debug!("login trigger disabled, ignoring submit");
            return SubmitOutcome::Ignored;
        }
        self.login_phase = SubmissionPhase::Validating;

        let email = self.login.email.trim().to_string();
        let report = validation::validate_login(&email, self.login.password.expose_secret());
        if let Some(outcome) = self.gate(FormKind::Login, &report) {
            return outcome;
        }

        let body = to_body(&LoginRequest {
            email: &email,
            password: self.login.password.expose_secret(),
        });
        let response = self.dispatch(FormKind::Login, LOGIN_ENDPOINT, body).await;

        let outcome = match response {
            Ok(response) if response.ok => self.complete_login(response.data.as_ref()),
            Ok(response) => self.fail(FormKind::Login, rejection_message(&response)),
            Err(err) => {
                warn!("login request failed: {err}");
                self.fail(FormKind::Login, NETWORK_ERROR.to_string())
            }
        };

        self.release(FormKind::Login);
        outcome
    }

    #[instrument(skip(self))]
    pub async fn submit_register(&mut self) -> SubmitOutcome {
        if self.register_phase != SubmissionPhase::Idle {
            debug!("register trigger disabled, ignoring submit");
            return SubmitOutcome::Ignored;
        }
        self.register_phase = SubmissionPhase::Validating;

        let email = self.register.email.trim().to_string();
        let report = validation::validate_register(
            &email,
            self.register.password.expose_secret(),
            self.register.confirm_password.expose_secret(),
        );
        if let Some(outcome) = self.gate(FormKind::Register, &report) {
            return outcome;
        }

        let body = to_body(&RegisterRequest {
            email: &email,
            password: self.register.password.expose_secret(),
            confirm_password: self.register.confirm_password.expose_secret(),
        });
        let response = self.dispatch(FormKind::Register, REGISTER_ENDPOINT, body).await;

        let message = match response {
            Ok(response) if response.ok => match success_message(response.data.as_ref()) {
                Some(message) => message,
                None => {
                    warn!("register response body was not parseable");
                    let outcome = self.fail(FormKind::Register, NETWORK_ERROR.to_string());
                    self.release(FormKind::Register);
                    return outcome;
                }
            },
            Ok(response) => {
                let outcome = self.fail(FormKind::Register, rejection_message(&response));
                self.release(FormKind::Register);
                return outcome;
            }
            Err(err) => {
                warn!("register request failed: {err}");
                let outcome = self.fail(FormKind::Register, NETWORK_ERROR.to_string());
                self.release(FormKind::Register);
                return outcome;
            }
        };

        info!("registration accepted");
        self.ui
            .show_status(FormKind::Register, StatusKind::Success, &message);
        self.release(FormKind::Register);

        self.deps
            .delay
            .sleep(self.deps.registration_redirect_delay)
            .await;

        let password = SecretString::from(self.register.password.expose_secret().to_owned());
        self.view.show_login(&mut self.ui);
        self.ui.prefill_login(&email, &password);
        self.ui.focus(FieldId::LoginPassword);
        self.login = LoginForm { email, password };

        SubmitOutcome::Registered(message)
    }

    /// Renders field errors for `form` and returns early on invalid input.
    fn gate(&mut self, form: FormKind, report: &Validation) -> Option<SubmitOutcome> {
        for field in form.fields() {
            self.ui.clear_field_error(*field);
        }
        for error in &report.errors {
            self.ui.show_field_error(error.field, &error.message);
        }

        if report.valid {
            None
        } else {
            debug!(errors = report.errors.len(), "validation failed");
            self.set_phase(form, SubmissionPhase::Idle);
            Some(SubmitOutcome::Invalid(report.errors.clone()))
        }
    }

    async fn dispatch(
        &mut self,
        form: FormKind,
        endpoint: &str,
        body: Result<Value, AppError>,
    ) -> Result<GatewayResponse, AppError> {
        self.ui.hide_status(form);
        self.ui.set_pending(form, true);
        self.set_phase(form, SubmissionPhase::Submitting);

        self.deps.gateway.send(endpoint, &body?).await
    }

    fn complete_login(&mut self, data: Option<&Value>) -> SubmitOutcome {
        let Some(session) = data.and_then(|data| data.get("user")).and_then(session_from_user)
        else {
            warn!("login response did not carry a complete user record");
            return self.fail(FormKind::Login, NETWORK_ERROR.to_string());
        };

        if let Err(err) = self.deps.session.set(&session) {
            warn!("failed to persist session: {err}");
            return self.fail(FormKind::Login, SESSION_NOT_SAVED.to_string());
        }

        info!("login accepted");
        self.ui.navigate(Destination::Portfolio);
        SubmitOutcome::LoggedIn(session)
    }

    fn fail(&mut self, form: FormKind, message: String) -> SubmitOutcome {
        self.ui.show_status(form, StatusKind::Error, &message);
        SubmitOutcome::Failed(message)
    }

    fn release(&mut self, form: FormKind) {
        self.ui.set_pending(form, false);
        self.set_phase(form, SubmissionPhase::Idle);
    }

    fn set_phase(&mut self, form: FormKind, phase: SubmissionPhase) {
        match form {
            FormKind::Login => self.login_phase = phase,
            FormKind::Register => self.register_phase = phase,
        }
    }
}

fn to_body<T: Serialize>(request: &T) -> Result<Value, AppError> {
    serde_json::to_value(request)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

fn rejection_message(response: &GatewayResponse) -> String {
    debug!(status = response.status, "request rejected");
    backend_error::normalize(response.data.as_ref())
}

/// Returns `None` when the body is missing or `null`; a parsed body without a
/// `message` gets the default text.
fn success_message(data: Option<&Value>) -> Option<String> {
    let data = data.filter(|data| !data.is_null())?;
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(REGISTRATION_SUCCESS);
    Some(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::success_message;
    use super::REGISTRATION_SUCCESS;
    use serde_json::json;

    #[test]
    fn success_message_prefers_the_server_text() {
        assert_eq!(
            success_message(Some(&json!({ "message": "Welcome aboard." }))).as_deref(),
            Some("Welcome aboard.")
        );
        assert_eq!(
            success_message(Some(&json!({ "message": "" }))).as_deref(),
            Some(REGISTRATION_SUCCESS)
        );
        assert_eq!(
            success_message(Some(&json!({}))).as_deref(),
            Some(REGISTRATION_SUCCESS)
        );
    }

    #[test]
    fn success_message_requires_a_parsed_body() {
        assert_eq!(success_message(None), None);
        assert_eq!(success_message(Some(&json!(null))), None);
    }
}
