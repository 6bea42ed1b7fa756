//! # Twenty20 (login front end)
//!
//! `twenty20` is the client side of a small account system. It renders a
//! login/registration surface, validates input before any network round-trip,
//! exchanges credentials with the remote service, and keeps a minimal session
//! record on the client to gate access to the portfolio page.
//!
//! ## Flow
//!
//! 1. **Landing:** mounting the landing view clears any stale session and shows
//!    the login form.
//! 2. **Submit:** a submission is validated locally; invalid input never leaves
//!    the client. Valid input is POSTed as JSON to `/api/login` or `/api/register`.
//! 3. **Outcome:** failures become a form-scoped status message. A successful
//!    login stores the returned user record and navigates to `/portfolio`. A
//!    successful registration switches back to the login form, pre-filled.
//! 4. **Portfolio:** the protected page reads the session once and redirects to
//!    the landing view when it is missing or incomplete.
//!
//! The session check is UX-only; real access control must live on the API.

pub mod app;
pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
