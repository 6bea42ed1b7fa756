//! Command-line argument dispatch.
//!
//! This module resolves the client configuration from validated CLI arguments
//! and maps the selected subcommand to the matching action.

use crate::{
    app::{config::RuntimeConfig, AppConfig},
    cli::{
        actions::{login, logout, portfolio, register, Action},
        commands::{
            ARG_API_URL, ARG_CONFIRM_PASSWORD, ARG_DATA_DIR, ARG_EMAIL, ARG_PASSWORD, ARG_YES,
            CMD_LOGIN, CMD_LOGOUT, CMD_PORTFOLIO, CMD_REGISTER,
        },
    },
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use url::Url;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the subcommand is missing or the API URL is malformed.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand"))?;

    let config = AppConfig::load(RuntimeConfig::new(
        sub.get_one::<String>(ARG_API_URL).map(String::as_str),
        sub.get_one::<String>(ARG_DATA_DIR).map(String::as_str),
    ));
    Url::parse(&config.api_base_url)
        .with_context(|| format!("invalid API URL: {}", config.api_base_url))?;

    let text = |id: &str| sub.get_one::<String>(id).cloned().unwrap_or_default();
    let secret = |id: &str| SecretString::from(text(id));

    match name {
        CMD_LOGIN => Ok(Action::Login(login::Args {
            config,
            email: text(ARG_EMAIL),
            password: secret(ARG_PASSWORD),
        })),
        CMD_REGISTER => Ok(Action::Register(register::Args {
            config,
            email: text(ARG_EMAIL),
            password: secret(ARG_PASSWORD),
            confirm_password: secret(ARG_CONFIRM_PASSWORD),
        })),
        CMD_PORTFOLIO => Ok(Action::Portfolio(portfolio::Args { config })),
        CMD_LOGOUT => Ok(Action::Logout(logout::Args {
            config,
            assume_yes: sub.get_flag(ARG_YES),
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}
