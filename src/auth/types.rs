//! Form identifiers, status kinds, and the request/response payloads exchanged
//! with the auth API. Request payloads carry plaintext passwords, so they must
//! never be logged.

use serde::{Deserialize, Serialize};

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const REGISTER_ENDPOINT: &str = "/api/register";

/// Label shown on a trigger while its request is in flight.
pub const PENDING_LABEL: &str = "Please wait...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    LoginEmail,
    LoginPassword,
    RegisterEmail,
    RegisterPassword,
    RegisterConfirm,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::LoginEmail,
        FieldId::LoginPassword,
        FieldId::RegisterEmail,
        FieldId::RegisterPassword,
        FieldId::RegisterConfirm,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldId::LoginEmail => "login-email",
            FieldId::LoginPassword => "login-password",
            FieldId::RegisterEmail => "register-email",
            FieldId::RegisterPassword => "register-password",
            FieldId::RegisterConfirm => "register-confirm",
        }
    }

    #[must_use]
    pub const fn form(self) -> FormKind {
        match self {
            FieldId::LoginEmail | FieldId::LoginPassword => FormKind::Login,
            FieldId::RegisterEmail | FieldId::RegisterPassword | FieldId::RegisterConfirm => {
                FormKind::Register
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Fields owned by this form, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormKind::Login => &[FieldId::LoginEmail, FieldId::LoginPassword],
            FormKind::Register => &[
                FieldId::RegisterEmail,
                FieldId::RegisterPassword,
                FieldId::RegisterConfirm,
            ],
        }
    }

    /// Idle label of the form's trigger.
    #[must_use]
    pub const fn trigger_label(self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Register => "Register",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Portfolio,
}

impl Destination {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Destination::Landing => "/",
            Destination::Portfolio => "/portfolio",
        }
    }
}

/// A validation failure scoped to one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The authenticated identity kept on the client after login.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub username: String,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}
