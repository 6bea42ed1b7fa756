//! Terminal implementation of the presentation ports. Field errors and error
//! banners go to stderr, success banners, notices and the account view to
//! stdout. The latest UI state is kept so actions can inspect where a flow ended.

use crate::auth::{
    types::{Destination, FieldId, FormKind, Session, StatusKind, PENDING_LABEL},
    ui::{Navigator, Renderer},
    view::ViewState,
};
use anyhow::{Context, Result};
use dialoguer::Confirm;
use secrecy::SecretString;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct TerminalUi {
    view: Option<ViewState>,
    field_errors: HashMap<FieldId, String>,
    statuses: HashMap<FormKind, (StatusKind, String)>,
    pending: HashMap<FormKind, bool>,
    destination: Option<Destination>,
    prefilled_email: Option<String>,
}

impl TerminalUi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> Option<ViewState> {
        self.view
    }

    #[must_use]
    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn status(&self, form: FormKind) -> Option<(StatusKind, &str)> {
        self.statuses
            .get(&form)
            .map(|(kind, text)| (*kind, text.as_str()))
    }

    #[must_use]
    pub fn is_pending(&self, form: FormKind) -> bool {
        self.pending.get(&form).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn destination(&self) -> Option<Destination> {
        self.destination
    }

    #[must_use]
    pub fn prefilled_email(&self) -> Option<&str> {
        self.prefilled_email.as_deref()
    }

    /// Prints an informational line outside any form.
    pub fn notice(&self, text: &str) {
        println!("{text}");
    }

    /// Asks a yes/no question on the terminal, defaulting to no.
    ///
    /// # Errors
    /// Returns an error when no interactive terminal is available.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("confirmation needs an interactive terminal, pass --yes to skip it")
    }

    /// Text the form's trigger currently shows.
    #[must_use]
    pub fn trigger_label(&self, form: FormKind) -> &'static str {
        if self.is_pending(form) {
            PENDING_LABEL
        } else {
            form.trigger_label()
        }
    }
}

impl Renderer for TerminalUi {
    fn show_view(&mut self, view: ViewState) {
        debug!(?view, "view shown");
        self.view = Some(view);
    }

    fn show_field_error(&mut self, field: FieldId, message: &str) {
        eprintln!("  {}: {message}", field.as_str());
        self.field_errors.insert(field, message.to_string());
    }

    fn clear_field_error(&mut self, field: FieldId) {
        self.field_errors.remove(&field);
    }

    fn show_status(&mut self, form: FormKind, kind: StatusKind, text: &str) {
        match kind {
            StatusKind::Success => println!("{text}"),
            StatusKind::Error => eprintln!("{text}"),
        }
        self.statuses.insert(form, (kind, text.to_string()));
    }

    fn hide_status(&mut self, form: FormKind) {
        self.statuses.remove(&form);
    }

    fn set_pending(&mut self, form: FormKind, pending: bool) {
        self.pending.insert(form, pending);
        debug!(?form, label = self.trigger_label(form), "trigger updated");
    }

    fn prefill_login(&mut self, email: &str, _password: &SecretString) {
        self.prefilled_email = Some(email.to_string());
    }

    fn focus(&mut self, field: FieldId) {
        debug!(field = field.as_str(), "focus moved");
    }

    fn show_account(&mut self, session: &Session) {
        println!("Signed in as {}", session.email);
    }
}

impl Navigator for TerminalUi {
    fn navigate(&mut self, destination: Destination) {
        debug!(path = destination.path(), "navigating");
        self.destination = Some(destination);
    }
}
