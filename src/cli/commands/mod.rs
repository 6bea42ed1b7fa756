pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_DATA_DIR: &str = "data-dir";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_YES: &str = "yes";

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_PORTFOLIO: &str = "portfolio";
pub const CMD_LOGOUT: &str = "logout";

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email address")
        .env("TWENTY20_EMAIL")
        .default_value("")
        .hide_default_value(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long("password")
        .help("Account password")
        .env("TWENTY20_PASSWORD")
        .hide_env_values(true)
        .default_value("")
        .hide_default_value(true)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("twenty20")
        .about("Login and registration front end")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the auth API, example: https://twenty20.dev")
                .env("TWENTY20_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_DATA_DIR)
                .long("data-dir")
                .help("Directory holding the client session")
                .env("TWENTY20_DATA_DIR")
                .global(true),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in and open the portfolio")
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create an account")
                .arg(email_arg())
                .arg(password_arg())
                .arg(
                    Arg::new(ARG_CONFIRM_PASSWORD)
                        .short('c')
                        .long("confirm-password")
                        .help("Repeat the password")
                        .env("TWENTY20_CONFIRM_PASSWORD")
                        .hide_env_values(true)
                        .default_value("")
                        .hide_default_value(true),
                ),
        )
        .subcommand(Command::new(CMD_PORTFOLIO).about("Open the portfolio with the stored session"))
        .subcommand(
            Command::new(CMD_LOGOUT)
                .about("Sign out and clear the stored session")
                .arg(
                    Arg::new(ARG_YES)
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        );

    logging::with_args(command)
}

/// Returns the matches that carry global arguments: the subcommand's when present.
#[must_use]
pub fn global_matches(matches: &clap::ArgMatches) -> &clap::ArgMatches {
    matches.subcommand().map_or(matches, |(_, sub)| sub)
}
