//! Presentation ports consumed by the view and submission controllers.
//!
//! The controllers never touch a concrete UI. A front end implements
//! [`Renderer`] and [`Navigator`]; the post-registration pause goes through
//! [`Delay`] so tests can run it without waiting on real time.

use crate::auth::{
    types::{Destination, FieldId, FormKind, Session, StatusKind},
    view::ViewState,
};
use async_trait::async_trait;
use secrecy::SecretString;
use std::time::Duration;

pub trait Renderer {
    /// Shows the region for `view` and hides the other one.
    fn show_view(&mut self, view: ViewState);

    fn show_field_error(&mut self, field: FieldId, message: &str);

    fn clear_field_error(&mut self, field: FieldId);

    /// Shows the form-scoped status banner.
    fn show_status(&mut self, form: FormKind, kind: StatusKind, text: &str);

    fn hide_status(&mut self, form: FormKind);

    /// Disables the trigger and swaps its label while `pending` is set.
    fn set_pending(&mut self, form: FormKind, pending: bool);

    /// Writes values into the login inputs.
    fn prefill_login(&mut self, email: &str, password: &SecretString);

    fn focus(&mut self, field: FieldId);

    /// Renders the signed-in account on the protected page.
    fn show_account(&mut self, session: &Session);
}

pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}

#[async_trait]
pub trait Delay: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real-time delay backed by the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
